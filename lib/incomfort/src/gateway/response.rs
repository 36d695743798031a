use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HeaterList {
    #[serde(rename = "heaterlist")]
    pub heaters: Vec<Option<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HeaterData {
    pub nodenr: u8,
    pub ch_temp_lsb: u8,
    pub ch_temp_msb: u8,
    pub tap_temp_lsb: u8,
    pub tap_temp_msb: u8,
    pub ch_pressure_lsb: u8,
    pub ch_pressure_msb: u8,
    pub room_temp_1_lsb: u8,
    pub room_temp_1_msb: u8,
    pub room_temp_set_1_lsb: u8,
    pub room_temp_set_1_msb: u8,
    pub room_temp_2_lsb: u8,
    pub room_temp_2_msb: u8,
    pub room_temp_set_2_lsb: u8,
    pub room_temp_set_2_msb: u8,
    pub displ_code: u8,
    #[serde(rename = "IO")]
    pub io: u8,
    pub serial_year: u8,
    pub serial_month: u8,
    pub serial_line: u8,
    pub serial_sn1: u8,
    pub serial_sn2: u8,
    pub serial_sn3: u8,
    pub room_set_ovr_1_msb: u8,
    pub room_set_ovr_1_lsb: u8,
    pub room_set_ovr_2_msb: u8,
    pub room_set_ovr_2_lsb: u8,
    pub rf_message_rssi: u8,
    pub rfstatus_cntr: u8,
}
