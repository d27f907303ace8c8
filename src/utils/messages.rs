use serde::Deserialize;

use crate::services::station_lookup::{lookup::LookupError, session::SessionError};

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

pub fn describe_session_error(err: &SessionError, locale: Locale) -> String {
    match (err, locale) {
        (SessionError::GeolocationUnavailable(_), Locale::En) => {
            "Unable to determine your location".to_string()
        }
        (SessionError::GeolocationUnavailable(_), Locale::Th) => {
            "ไม่สามารถดึงตำแหน่งได้".to_string()
        }
        (SessionError::TimedOut { origin }, Locale::En) => format!(
            "Timed out fetching air quality data (latitude: {}, longitude: {})",
            origin.latitude, origin.longitude
        ),
        (SessionError::TimedOut { origin }, Locale::Th) => format!(
            "หมดเวลาในการดึงข้อมูล (ละติจูด: {}, ลองจิจูด: {})",
            origin.latitude, origin.longitude
        ),
        (SessionError::Lookup(e), locale) => describe_lookup_error(e, locale),
    }
}

pub fn describe_lookup_error(err: &LookupError, locale: Locale) -> String {
    let c = err.coordinate();

    match (err, locale) {
        (LookupError::ExhaustedRetries { .. }, Locale::En) => format!(
            "No air quality data found for this location after several attempts (latitude: {}, longitude: {})",
            c.latitude, c.longitude
        ),
        (LookupError::ExhaustedRetries { .. }, Locale::Th) => format!(
            "ไม่พบข้อมูลอากาศสำหรับตำแหน่งนี้หลังจากพยายามหลายครั้ง (ละติจูด: {}, ลองจิจูด: {})",
            c.latitude, c.longitude
        ),
        (LookupError::NoPm25Measurement { .. }, Locale::En) => format!(
            "No PM2.5 value found for this location (latitude: {}, longitude: {})",
            c.latitude, c.longitude
        ),
        (LookupError::NoPm25Measurement { .. }, Locale::Th) => format!(
            "ไม่พบข้อมูลค่า PM2.5 สำหรับตำแหน่งนี้ (ละติจูด: {}, ลองจิจูด: {})",
            c.latitude, c.longitude
        ),
        (LookupError::Transport { .. }, Locale::En) => format!(
            "An error occurred while fetching data (latitude: {}, longitude: {})",
            c.latitude, c.longitude
        ),
        (LookupError::Transport { .. }, Locale::Th) => format!(
            "เกิดข้อผิดพลาดในการดึงข้อมูล (ละติจูด: {}, ลองจิจูด: {})",
            c.latitude, c.longitude
        ),
    }
}
