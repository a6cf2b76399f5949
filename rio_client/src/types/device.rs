//! Devices: external systems (tape libraries, flash arrays, object stores)
//! that agents archive to.

use serde::{Deserialize, Serialize};

use super::meta::{list_result, PageInfo};

/// Backend family of a device; also its path segment under `/devices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Spectra,
    Flashblade,
    Tbpfr,
    Vail,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Spectra => "spectra",
            DeviceType::Flashblade => "flashblade",
            DeviceType::Tbpfr => "tbpfr",
            DeviceType::Vail => "vail",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any device creation payload.
///
/// The `@type` tag is used to route the request to `/devices/{type}` and is
/// stripped before the body is sent.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "@type", rename_all = "lowercase")]
pub enum DeviceRequest<'a> {
    Spectra(&'a SpectraDeviceCreateRequest),
    Flashblade(&'a FlashbladeDeviceCreateRequest),
    Tbpfr(&'a TbpfrDeviceCreateRequest),
    Vail(&'a VailDeviceCreateRequest),
}

impl DeviceRequest<'_> {
    pub fn device_type(&self) -> DeviceType {
        match self {
            DeviceRequest::Spectra(_) => DeviceType::Spectra,
            DeviceRequest::Flashblade(_) => DeviceType::Flashblade,
            DeviceRequest::Tbpfr(_) => DeviceType::Tbpfr,
            DeviceRequest::Vail(_) => DeviceType::Vail,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DeviceRequest::Spectra(r) => &r.name,
            DeviceRequest::Flashblade(r) => &r.name,
            DeviceRequest::Tbpfr(r) => &r.name,
            DeviceRequest::Vail(r) => &r.name,
        }
    }
}

// ============================================================================
// Spectra tape libraries
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectraDeviceCreateRequest {
    pub name: String,
    pub mgmt_interface: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectraDeviceUpdateRequest {
    pub mgmt_interface: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectraDeviceResponse {
    pub name: String,
    pub mgmt_interface: String,
    pub username: String,
    #[serde(default)]
    pub data_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectraDeviceListResponse {
    pub devices: Vec<SpectraDeviceResponse>,
    pub page: PageInfo,
}
list_result!(SpectraDeviceListResponse, devices, SpectraDeviceResponse);

// ============================================================================
// Flashblade arrays
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashbladeDeviceCreateRequest {
    pub name: String,
    pub mgmt_interface: String,
    pub api_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashbladeDeviceResponse {
    pub name: String,
    pub mgmt_interface: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashbladeDeviceListResponse {
    pub devices: Vec<FlashbladeDeviceResponse>,
    pub page: PageInfo,
}
list_result!(
    FlashbladeDeviceListResponse,
    devices,
    FlashbladeDeviceResponse
);

// ============================================================================
// TBPFR endpoints
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TbpfrDeviceCreateRequest {
    pub name: String,
    pub endpoint: String,
    pub temp_storage: String,
    pub task_repository: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TbpfrDeviceResponse {
    pub name: String,
    pub endpoint: String,
    pub temp_storage: String,
    pub task_repository: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TbpfrDeviceListResponse {
    pub devices: Vec<TbpfrDeviceResponse>,
    pub page: PageInfo,
}
list_result!(TbpfrDeviceListResponse, devices, TbpfrDeviceResponse);

// ============================================================================
// Vail sphere endpoints
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VailDeviceCreateRequest {
    pub name: String,
    pub mgmt_interface: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VailDeviceResponse {
    pub name: String,
    pub mgmt_interface: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VailDeviceListResponse {
    pub devices: Vec<VailDeviceResponse>,
    pub page: PageInfo,
}
list_result!(VailDeviceListResponse, devices, VailDeviceResponse);
