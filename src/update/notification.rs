//! Notification update handlers

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::NotificationMsg;
use crate::model::Workspace;

pub fn update_notification(model: &mut Workspace, msg: NotificationMsg) -> Option<Cmd> {
    match msg {
        NotificationMsg::Post {
            severity,
            title,
            ttl,
        } => {
            match ttl {
                Some(ttl) => model.notifications.post_with_ttl(severity, title, ttl),
                None => model.notifications.post(severity, title),
            };
            Some(Cmd::Redraw)
        }
        NotificationMsg::Dismiss(id) => model.notifications.dismiss(id).then_some(Cmd::Redraw),
        NotificationMsg::PruneExpired => {
            let pruned = model.notifications.prune_expired(Instant::now());
            (pruned > 0).then_some(Cmd::Redraw)
        }
    }
}
