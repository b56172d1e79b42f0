//! The `notifications` command: list and mark read.

use clap::Args;

use khales_core::NotificationId;
use khales_pos::AppState;

/// Arguments for `khales notifications`.
#[derive(Debug, Args)]
pub struct NotificationsArgs {
    /// Mark one notification as read
    #[arg(long, conflicts_with = "all_read")]
    pub mark_read: Option<NotificationId>,

    /// Mark every notification as read
    #[arg(long)]
    pub all_read: bool,
}

/// List notifications, or mark them read.
pub fn dispatch(
    state: &mut AppState,
    args: &NotificationsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(id) = args.mark_read {
        if state.mark_notification_read(id)? {
            println!("تم التحديد كمقروء");
        } else {
            println!("الإشعار غير موجود");
        }
        return Ok(());
    }
    if args.all_read {
        state.mark_all_notifications_read()?;
        println!("تم تحديد الكل كمقروء");
        return Ok(());
    }

    let unread = state.shop().unread_notifications();
    println!("غير المقروءة: {unread}\n");
    for notification in &state.shop().notifications {
        let marker = if notification.is_read { " " } else { "●" };
        println!(
            "{marker} {}  [{}]  {}",
            notification.title,
            notification.date.format("%Y-%m-%d %H:%M"),
            notification.message,
        );
        println!("    المعرف: {}", notification.id);
    }
    Ok(())
}
