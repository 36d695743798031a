const MIN_SETPOINT: f32 = 5.0;
const MAX_SETPOINT: f32 = 30.0;

/// Decodes a little-endian fixed-point pair in hundredths.
pub fn lsb_msb(lsb: u8, msb: u8) -> f32 {
    (lsb as u16 + msb as u16 * 256) as f32 / 100.0
}

pub fn display_label(code: u8) -> String {
    let label = match code {
        85 => "sensortest",
        170 => "service",
        204 => "tapwater",
        51 => "tapwater int.",
        240 => "boiler int.",
        15 => "boiler ext.",
        153 => "postrun boiler",
        102 => "central heating",
        0 => "opentherm",
        255 => "buffer",
        24 => "frost",
        231 => "postrun ch",
        126 => "standby",
        37 => "central heating rf",
        other => return format!("unknown: {other}"),
    };

    label.to_string()
}

/// Clamps `target` into the thermostat range and converts it to tenths
/// of a degree above the 5 °C floor.
pub fn encode_setpoint(target: f32) -> u8 {
    if target.is_nan() {
        return 0;
    }

    let clamped = target.clamp(MIN_SETPOINT, MAX_SETPOINT);
    ((clamped - MIN_SETPOINT) * 10.0).round() as u8
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IoFlags {
    pub lockout: bool,
    pub pumping: bool,
    pub tapping: bool,
    pub burning: bool,
}

impl IoFlags {
    const LOCKOUT: u8 = 1 << 0;
    const PUMPING: u8 = 1 << 1;
    const TAPPING: u8 = 1 << 2;
    const BURNING: u8 = 1 << 3;

    pub fn from_bits(io: u8) -> IoFlags {
        IoFlags {
            lockout: io & Self::LOCKOUT != 0,
            pumping: io & Self::PUMPING != 0,
            tapping: io & Self::TAPPING != 0,
            burning: io & Self::BURNING != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsb_msb() {
        assert_eq!(lsb_msb(44, 0), 0.44);
        assert_eq!(lsb_msb(0, 1), 2.56);
        assert_eq!(lsb_msb(0, 0), 0.0);
        assert_eq!(lsb_msb(255, 255), 655.35);

        // 0x0802 = 2050 hundredths
        assert_eq!(lsb_msb(0x02, 0x08), 20.5);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label(102), "central heating");
        assert_eq!(display_label(126), "standby");
        assert_eq!(display_label(204), "tapwater");
        assert_eq!(display_label(0), "opentherm");
        assert_eq!(display_label(37), "central heating rf");
        assert_eq!(display_label(51), "tapwater int.");
    }

    #[test]
    fn test_unknown_display_label() {
        assert_eq!(display_label(99), "unknown: 99");
        assert!(display_label(1).contains('1'));
    }

    #[test]
    fn test_io_flags() {
        assert_eq!(
            IoFlags::from_bits(0b1111),
            IoFlags {
                lockout: true,
                pumping: true,
                tapping: true,
                burning: true,
            }
        );

        assert_eq!(IoFlags::from_bits(0), IoFlags::default());

        assert_eq!(
            IoFlags::from_bits(0b1000),
            IoFlags {
                burning: true,
                ..Default::default()
            }
        );

        assert_eq!(
            IoFlags::from_bits(0b0101),
            IoFlags {
                lockout: true,
                tapping: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_io_flags_ignore_high_bits() {
        assert_eq!(IoFlags::from_bits(0b1111_0000), IoFlags::default());
    }

    #[test]
    fn test_encode_setpoint() {
        assert_eq!(encode_setpoint(20.0), 150);
        assert_eq!(encode_setpoint(5.0), 0);
        assert_eq!(encode_setpoint(30.0), 250);
        assert_eq!(encode_setpoint(21.5), 165);
        assert_eq!(encode_setpoint(20.06), 151);
    }

    #[test]
    fn test_encode_setpoint_clamps() {
        assert_eq!(encode_setpoint(3.0), encode_setpoint(5.0));
        assert_eq!(encode_setpoint(35.0), encode_setpoint(30.0));
        assert_eq!(encode_setpoint(-40.0), 0);
        assert_eq!(encode_setpoint(f32::INFINITY), 250);
        assert_eq!(encode_setpoint(f32::NAN), 0);
    }
}
