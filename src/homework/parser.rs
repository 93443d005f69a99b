use serde_json::Value;
use thiserror::Error;

use super::verdict::verdict_for;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomeworkError {
    #[error("ошибка при парсинге информации о домашней работе - запись не является словарём")]
    NotAnObject,
    #[error("ошибка при парсинге информации о домашней работе - отсутствует ключ \"{0}\" в словаре")]
    MissingField(&'static str),
    #[error("ошибка при парсинге информации о домашней работе - неверный тип значения ключа \"{0}\"")]
    InvalidField(&'static str),
    #[error("ошибка при парсинге информации о домашней работе - неожиданный статус домашней работы: {0}")]
    UnknownVerdict(String),
}

/// Builds the chat message for one homework record.
pub fn parse_status(homework: &Value) -> Result<String, HomeworkError> {
    let record = homework.as_object().ok_or(HomeworkError::NotAnObject)?;

    let status = record
        .get("status")
        .ok_or(HomeworkError::MissingField("status"))?;
    let homework_name = record
        .get("homework_name")
        .ok_or(HomeworkError::MissingField("homework_name"))?;

    // Non-string statuses are reported verbatim so the log shows what arrived.
    let verdict = status
        .as_str()
        .and_then(verdict_for)
        .ok_or_else(|| HomeworkError::UnknownVerdict(status.to_string()))?;
    let homework_name = homework_name
        .as_str()
        .ok_or(HomeworkError::InvalidField("homework_name"))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name, verdict
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{HomeworkError, parse_status};

    #[test]
    fn formats_known_statuses() {
        let record = json!({"status": "approved", "homework_name": "hw1"});
        assert_eq!(
            parse_status(&record).expect("record should parse"),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );

        let record = json!({"status": "reviewing", "homework_name": "user__final.zip", "id": 7});
        assert_eq!(
            parse_status(&record).expect("record should parse"),
            "Изменился статус проверки работы \"user__final.zip\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn missing_fields_are_reported() {
        let no_status = json!({"homework_name": "hw1"});
        assert_eq!(
            parse_status(&no_status).unwrap_err(),
            HomeworkError::MissingField("status")
        );

        let no_name = json!({"status": "rejected"});
        assert_eq!(
            parse_status(&no_name).unwrap_err(),
            HomeworkError::MissingField("homework_name")
        );
    }

    #[test]
    fn unknown_status_carries_the_value() {
        let record = json!({"status": "lost", "homework_name": "hw1"});
        assert_eq!(
            parse_status(&record).unwrap_err(),
            HomeworkError::UnknownVerdict("\"lost\"".to_string())
        );

        let numeric = json!({"status": 3, "homework_name": "hw1"});
        assert_eq!(
            parse_status(&numeric).unwrap_err(),
            HomeworkError::UnknownVerdict("3".to_string())
        );
    }

    #[test]
    fn rejects_non_object_and_non_string_name() {
        assert_eq!(parse_status(&json!("hw1")).unwrap_err(), HomeworkError::NotAnObject);

        let record = json!({"status": "approved", "homework_name": ["hw1"]});
        assert_eq!(
            parse_status(&record).unwrap_err(),
            HomeworkError::InvalidField("homework_name")
        );
    }
}
