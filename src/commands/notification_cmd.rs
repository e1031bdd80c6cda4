use crate::errors::AppError;
use crate::models::notification::Notification;
use crate::AppState;

/// Bütün bildirişlər
pub fn get_notifications(state: &AppState) -> Result<Vec<Notification>, AppError> {
    Ok(state.notifications()?.list())
}

/// Başlıqdakı oxunmamış sayğacı
pub fn get_unread_count(state: &AppState) -> Result<usize, AppError> {
    Ok(state.notifications()?.unread_count())
}

/// Bir bildirişi oxunmuş et
pub fn mark_notification_read(state: &AppState, id: &str) -> Result<bool, AppError> {
    let transitioned = state.notifications()?.mark_read(id);
    if transitioned {
        crate::log_debug!("NOTIFICATION", "notification marked read", serde_json::json!({
            "id": id,
        }));
    }
    Ok(transitioned)
}

/// Hamısını oxunmuş et
pub fn mark_all_notifications_read(state: &AppState) -> Result<usize, AppError> {
    let transitioned = state.notifications()?.mark_all_read();
    crate::log_debug!("NOTIFICATION", "all notifications marked read", serde_json::json!({
        "transitioned": transitioned,
    }));
    Ok(transitioned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_badge_reaches_zero_after_bulk_read() {
        let state = AppState::seeded();
        assert!(get_unread_count(&state).unwrap() > 0);

        mark_all_notifications_read(&state).unwrap();
        assert_eq!(get_unread_count(&state).unwrap(), 0);
    }

    #[test]
    fn single_read_is_idempotent_at_the_command_level() {
        let state = AppState::seeded();
        let before = get_unread_count(&state).unwrap();

        assert!(mark_notification_read(&state, "n2").unwrap());
        assert!(!mark_notification_read(&state, "n2").unwrap());
        assert_eq!(get_unread_count(&state).unwrap(), before - 1);
    }

    #[test]
    fn absent_id_is_a_noop_not_an_error() {
        let state = AppState::seeded();
        assert!(!mark_notification_read(&state, "yoxdur").unwrap());
    }
}
