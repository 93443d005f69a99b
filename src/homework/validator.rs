use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("ошибка в ответе API - тело ответа не является JSON: {0}")]
    NotJson(String),
    #[error("ошибка в ответе API - неверный тип данных для ответа (ожидался словарь)")]
    NotAnObject,
    #[error("ошибка в ответе API - отсутствует ожидаемый ключ в ответе: \"{0}\"")]
    MissingKey(&'static str),
    #[error("ошибка в ответе API - неверный тип данных для значения ключа \"homeworks\"")]
    HomeworksNotAList,
    #[error("ошибка в ответе API - неверный тип данных для значения ключа \"current_date\"")]
    CurrentDateNotInteger,
}

/// A payload that passed the structural checks, borrowed from the decoded JSON.
#[derive(Debug, Clone, Copy)]
pub struct ValidResponse<'a> {
    pub homeworks: &'a [Value],
    pub current_date: i64,
}

pub fn check_response(response: &Value) -> Result<ValidResponse<'_>, ResponseError> {
    let object = response.as_object().ok_or(ResponseError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingKey("homeworks"))?;
    let current_date = object
        .get("current_date")
        .ok_or(ResponseError::MissingKey("current_date"))?;

    let homeworks = homeworks
        .as_array()
        .ok_or(ResponseError::HomeworksNotAList)?;
    let current_date = current_date
        .as_i64()
        .ok_or(ResponseError::CurrentDateNotInteger)?;

    Ok(ValidResponse {
        homeworks,
        current_date,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ResponseError, check_response};

    #[test]
    fn accepts_well_formed_payload() {
        let payload = json!({
            "homeworks": [{"status": "approved", "homework_name": "hw1"}],
            "current_date": 1000,
        });

        let valid = check_response(&payload).expect("payload should be valid");
        assert_eq!(valid.homeworks.len(), 1);
        assert_eq!(valid.current_date, 1000);
    }

    #[test]
    fn rejects_non_object_payloads() {
        for payload in [json!([]), json!("text"), json!(42), json!(null)] {
            assert_eq!(check_response(&payload).unwrap_err(), ResponseError::NotAnObject);
        }
    }

    #[test]
    fn reports_which_key_is_missing() {
        let no_homeworks = json!({"current_date": 1});
        assert_eq!(
            check_response(&no_homeworks).unwrap_err(),
            ResponseError::MissingKey("homeworks")
        );

        let no_date = json!({"homeworks": []});
        assert_eq!(
            check_response(&no_date).unwrap_err(),
            ResponseError::MissingKey("current_date")
        );
    }

    #[test]
    fn rejects_wrongly_typed_fields() {
        let homeworks_object = json!({"homeworks": {"status": "approved"}, "current_date": 1});
        assert_eq!(
            check_response(&homeworks_object).unwrap_err(),
            ResponseError::HomeworksNotAList
        );

        let date_string = json!({"homeworks": [], "current_date": "yesterday"});
        assert_eq!(
            check_response(&date_string).unwrap_err(),
            ResponseError::CurrentDateNotInteger
        );
    }

    #[test]
    fn messages_differ_per_failed_check() {
        let messages = [
            ResponseError::NotAnObject.to_string(),
            ResponseError::MissingKey("homeworks").to_string(),
            ResponseError::HomeworksNotAList.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }
}
