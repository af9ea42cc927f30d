//! Capacitive soil-moisture conversion.
//!
//! The probe reads high when dry (~1023 in air on a 10-bit ADC) and low
//! when wet (~200 fully submerged): conductivity pulls the analog value
//! down. The percentage keeps the deployed calibration endpoints and
//! truncating integer arithmetic.

/// Raw ADC value of a bone-dry probe (in air).
const RAW_DRY: i32 = 1023;
/// Raw ADC value of a fully wet probe.
const RAW_WET: i32 = 200;

/// Map a raw 10-bit ADC value to a 0–100 moisture percentage.
///
/// Linear between the calibration endpoints, clamped outside them.
pub fn percent_from_raw(raw: u16) -> u8 {
    let raw = i32::from(raw);
    let pct = (raw - RAW_DRY) * 100 / (RAW_WET - RAW_DRY);
    pct.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_endpoints() {
        assert_eq!(percent_from_raw(1023), 0);
        assert_eq!(percent_from_raw(200), 100);
    }

    #[test]
    fn midpoint_is_roughly_half() {
        let mid = percent_from_raw(((1023 + 200) / 2) as u16);
        assert!((49..=51).contains(&mid), "got {mid}");
    }

    #[test]
    fn out_of_range_values_clamp() {
        // Probe shorted or disconnected.
        assert_eq!(percent_from_raw(0), 100);
        assert_eq!(percent_from_raw(1023), 0);
        // 10-bit ADC can't exceed 1023, but the conversion still clamps.
        assert_eq!(percent_from_raw(4095), 0);
    }

    #[test]
    fn monotonically_wetter_as_raw_drops() {
        let mut last = percent_from_raw(1023);
        for raw in (200..=1023).rev().step_by(50) {
            let pct = percent_from_raw(raw as u16);
            assert!(pct >= last);
            last = pct;
        }
    }
}
