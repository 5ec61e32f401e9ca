//! Декодеры перечислений: код → человекочитаемая метка.
//! Неизвестный код даёт None, вызывающая сторона просто
//! не добавляет производное поле.

/// Единицы измерения датчиков MikroTik health
pub fn unit_name(code: u64) -> Option<&'static str> {
    match code {
        1 => Some("celsius"),
        2 => Some("rpm"),
        3 => Some("dV"),
        4 => Some("dA"),
        5 => Some("dW"),
        6 => Some("status"),
        _ => None,
    }
}

/// hrDeviceStatus
pub fn device_status_name(code: u64) -> Option<&'static str> {
    match code {
        0 | 1 => Some("unknown"),
        2 => Some("running"),
        3 => Some("warning"),
        4 => Some("testing"),
        5 => Some("down"),
        _ => None,
    }
}

/// ipNetToMediaType
pub fn media_type_name(code: u64) -> Option<&'static str> {
    match code {
        0 => Some(""),
        1 => Some("other"),
        2 => Some("invalid"),
        3 => Some("dynamic"),
        4 => Some("static"),
        _ => None,
    }
}

/// dot1dTpFdbStatus
pub fn fdb_status_name(code: u64) -> Option<&'static str> {
    match code {
        1 => Some("other"),
        2 => Some("invalid"),
        3 => Some("learned"),
        4 => Some("self"),
        5 => Some("mgmt"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_decode() {
        assert_eq!(unit_name(1), Some("celsius"));
        assert_eq!(unit_name(2), Some("rpm"));
        assert_eq!(device_status_name(2), Some("running"));
        assert_eq!(media_type_name(3), Some("dynamic"));
        assert_eq!(fdb_status_name(3), Some("learned"));
    }

    #[test]
    fn out_of_range_codes_do_not_panic() {
        assert_eq!(unit_name(99), None);
        assert_eq!(device_status_name(42), None);
        assert_eq!(media_type_name(7), None);
        assert_eq!(fdb_status_name(0), None);
    }
}
