use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::Cookie;
use serde::{Deserialize, Serialize};
use tracing::debug;

const FLASH_COOKIE: &str = "flash";

/// Тон одноразового уведомления.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FlashLevel {
    Success,
    Error,
}

/// Одноразовое уведомление, которое переживает редирект в подписанной куке
/// и показывается на следующей отрисованной странице.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Flash {
    pub(crate) level: FlashLevel,
    pub(crate) message: String,
}

impl Flash {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Ставит уведомление в очередь на следующий отрисованный ответ.
pub(crate) fn set(jar: SignedCookieJar, flash: &Flash) -> SignedCookieJar {
    let payload = match serde_json::to_string(flash) {
        Ok(payload) => payload,
        Err(err) => {
            debug!(error = %err, "flash message is not serializable, dropping it");
            return jar;
        }
    };

    // Значение куки не должно содержать `;` и кавычки, поэтому JSON
    // дополнительно кодируется в percent-encoding.
    let cookie = Cookie::build((FLASH_COOKIE, urlencoding::encode(&payload).into_owned()))
        .path("/")
        .http_only(true)
        .build();

    jar.add(cookie)
}

/// Забирает отложенное уведомление, удаляя куку. Подделанная или
/// нечитаемая кука считается отсутствием уведомления.
pub(crate) fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let flash = urlencoding::decode(cookie.value())
        .ok()
        .and_then(|payload| serde_json::from_str(&payload).ok());

    let removal = Cookie::build(FLASH_COOKIE).path("/").build();
    (jar.remove(removal), flash)
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::SignedCookieJar;
    use axum_extra::extract::cookie::Key;

    use super::{Flash, set, take};

    fn empty_jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::generate())
    }

    #[test]
    fn set_then_take_round_trips_the_message() {
        let flash = Flash::success("Post \"Hello & Co\" added.");

        let jar = set(empty_jar(), &flash);
        let (jar, taken) = take(jar);

        assert_eq!(taken, Some(flash));

        // Кука одноразовая, повторное чтение ничего не находит.
        let (_, again) = take(jar);
        assert_eq!(again, None);
    }

    #[test]
    fn take_without_cookie_finds_nothing() {
        let (_, taken) = take(empty_jar());
        assert_eq!(taken, None);
    }

    #[test]
    fn error_flash_keeps_its_level() {
        let jar = set(empty_jar(), &Flash::error("Saving posts failed."));
        let (_, taken) = take(jar);

        assert_eq!(taken, Some(Flash::error("Saving posts failed.")));
    }
}
