use crate::decoder::{display_label, lsb_msb, IoFlags};
use crate::gateway::HeaterData;

#[derive(Clone, Debug, PartialEq)]
pub struct Heater {
    index: usize,
    name: String,
    pub(crate) state: HeaterState,
}

impl Heater {
    pub(crate) fn new(index: usize, name: String) -> Heater {
        Heater {
            index,
            name,
            state: HeaterState::default(),
        }
    }

    /// Position of the heater in the gateway's heater list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot decoded from the latest successful refresh.
    pub fn state(&self) -> &HeaterState {
        &self.state
    }
}

/// Live telemetry of a heater. Temperatures are in °C, pressure in bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaterState {
    pub pressure: f32,
    pub heater_temperature: f32,
    pub tap_temperature: f32,
    pub room_temperature: f32,
    pub setpoint: f32,
    pub setpoint_override: f32,

    pub display_code: u8,
    pub display_label: String,

    pub is_burning: bool,
    pub is_lockout: bool,
    pub is_pumping: bool,
    pub is_tapping: bool,

    // second thermostat, zero when absent
    pub room_temperature_2: f32,
    pub setpoint_2: f32,
    pub setpoint_override_2: f32,

    pub node_number: u8,
    pub serial_number: String,
    pub rf_message_rssi: u8,
    pub rf_status_counter: u8,
}

impl From<&HeaterData> for HeaterState {
    fn from(data: &HeaterData) -> Self {
        let flags = IoFlags::from_bits(data.io);

        HeaterState {
            pressure: lsb_msb(data.ch_pressure_lsb, data.ch_pressure_msb),
            heater_temperature: lsb_msb(data.ch_temp_lsb, data.ch_temp_msb),
            tap_temperature: lsb_msb(data.tap_temp_lsb, data.tap_temp_msb),
            room_temperature: lsb_msb(data.room_temp_1_lsb, data.room_temp_1_msb),
            setpoint: lsb_msb(data.room_temp_set_1_lsb, data.room_temp_set_1_msb),
            setpoint_override: lsb_msb(data.room_set_ovr_1_lsb, data.room_set_ovr_1_msb),

            display_code: data.displ_code,
            display_label: display_label(data.displ_code),

            is_burning: flags.burning,
            is_lockout: flags.lockout,
            is_pumping: flags.pumping,
            is_tapping: flags.tapping,

            room_temperature_2: lsb_msb(data.room_temp_2_lsb, data.room_temp_2_msb),
            setpoint_2: lsb_msb(data.room_temp_set_2_lsb, data.room_temp_set_2_msb),
            setpoint_override_2: lsb_msb(data.room_set_ovr_2_lsb, data.room_set_ovr_2_msb),

            node_number: data.nodenr,
            serial_number: format!(
                "{:02}M{:02}{}{:02}{:02}{:02}",
                data.serial_year,
                data.serial_month,
                data.serial_line,
                data.serial_sn1,
                data.serial_sn2,
                data.serial_sn3
            ),
            rf_message_rssi: data.rf_message_rssi,
            rf_status_counter: data.rfstatus_cntr,
        }
    }
}
