use serde::de::DeserializeOwned;

use crate::{
    encoding::encode_path_segment,
    query::{PageQuery, Query},
    types::{
        DeviceRequest, DeviceType, EmptyResponse, FlashbladeDeviceCreateRequest,
        FlashbladeDeviceListResponse, FlashbladeDeviceResponse, Response,
        SpectraDeviceCreateRequest, SpectraDeviceListResponse, SpectraDeviceResponse,
        SpectraDeviceUpdateRequest, TbpfrDeviceCreateRequest, TbpfrDeviceListResponse,
        TbpfrDeviceResponse, VailDeviceCreateRequest, VailDeviceListResponse, VailDeviceResponse,
    },
    Client, Error,
};

fn devices_path(device_type: DeviceType) -> String {
    format!("/devices/{}", device_type)
}

fn device_path(device_type: DeviceType, name: &str) -> String {
    format!("/devices/{}/{}", device_type, encode_path_segment(name))
}

impl Client {
    /// Creates a device under `/devices/{type}`, the type taken from the request.
    pub async fn create_device<T: DeserializeOwned>(
        &self,
        request: DeviceRequest<'_>,
    ) -> Result<Response<T>, Error> {
        self.post(&devices_path(request.device_type()), &[], &request)
            .await
    }

    pub async fn get_device<T: DeserializeOwned>(
        &self,
        device_type: DeviceType,
        name: &str,
    ) -> Result<Response<T>, Error> {
        self.get(&device_path(device_type, name), &[]).await
    }

    pub async fn list_devices<T: DeserializeOwned>(
        &self,
        device_type: DeviceType,
        query: &PageQuery,
    ) -> Result<Response<T>, Error> {
        self.get(&devices_path(device_type), &query.to_params())
            .await
    }

    pub async fn delete_device(
        &self,
        device_type: DeviceType,
        name: &str,
    ) -> Result<Response<EmptyResponse>, Error> {
        self.delete(&device_path(device_type, name), &[]).await
    }

    pub async fn device_exists(&self, device_type: DeviceType, name: &str) -> Result<bool, Error> {
        self.head(&device_path(device_type, name)).await
    }

    /// Creates the device unless one with the same name already exists.
    /// Returns `true` if it was created.
    pub async fn ensure_device_exists(&self, request: DeviceRequest<'_>) -> Result<bool, Error> {
        if self
            .device_exists(request.device_type(), request.name())
            .await?
        {
            return Ok(false);
        }
        tracing::debug!(
            "Creating {} device {}",
            request.device_type(),
            request.name()
        );
        self.create_device::<EmptyResponse>(request).await?;
        Ok(true)
    }

    // Spectra tape libraries

    pub async fn create_spectra_device(
        &self,
        request: &SpectraDeviceCreateRequest,
    ) -> Result<Response<SpectraDeviceResponse>, Error> {
        self.create_device(DeviceRequest::Spectra(request)).await
    }

    pub async fn get_spectra_device(
        &self,
        name: &str,
    ) -> Result<Response<SpectraDeviceResponse>, Error> {
        self.get_device(DeviceType::Spectra, name).await
    }

    pub async fn update_spectra_device(
        &self,
        name: &str,
        request: &SpectraDeviceUpdateRequest,
    ) -> Result<Response<SpectraDeviceResponse>, Error> {
        self.put(&device_path(DeviceType::Spectra, name), request)
            .await
    }

    pub async fn list_spectra_devices(
        &self,
        query: &PageQuery,
    ) -> Result<Response<SpectraDeviceListResponse>, Error> {
        self.list_devices(DeviceType::Spectra, query).await
    }

    pub async fn ensure_spectra_device_exists(
        &self,
        request: &SpectraDeviceCreateRequest,
    ) -> Result<bool, Error> {
        self.ensure_device_exists(DeviceRequest::Spectra(request))
            .await
    }

    // Flashblade arrays

    pub async fn create_flashblade_device(
        &self,
        request: &FlashbladeDeviceCreateRequest,
    ) -> Result<Response<FlashbladeDeviceResponse>, Error> {
        self.create_device(DeviceRequest::Flashblade(request)).await
    }

    pub async fn get_flashblade_device(
        &self,
        name: &str,
    ) -> Result<Response<FlashbladeDeviceResponse>, Error> {
        self.get_device(DeviceType::Flashblade, name).await
    }

    pub async fn list_flashblade_devices(
        &self,
        query: &PageQuery,
    ) -> Result<Response<FlashbladeDeviceListResponse>, Error> {
        self.list_devices(DeviceType::Flashblade, query).await
    }

    pub async fn ensure_flashblade_device_exists(
        &self,
        request: &FlashbladeDeviceCreateRequest,
    ) -> Result<bool, Error> {
        self.ensure_device_exists(DeviceRequest::Flashblade(request))
            .await
    }

    // TBPFR endpoints

    pub async fn create_tbpfr_device(
        &self,
        request: &TbpfrDeviceCreateRequest,
    ) -> Result<Response<TbpfrDeviceResponse>, Error> {
        self.create_device(DeviceRequest::Tbpfr(request)).await
    }

    pub async fn get_tbpfr_device(&self, name: &str) -> Result<Response<TbpfrDeviceResponse>, Error> {
        self.get_device(DeviceType::Tbpfr, name).await
    }

    pub async fn list_tbpfr_devices(
        &self,
        query: &PageQuery,
    ) -> Result<Response<TbpfrDeviceListResponse>, Error> {
        self.list_devices(DeviceType::Tbpfr, query).await
    }

    pub async fn ensure_tbpfr_device_exists(
        &self,
        request: &TbpfrDeviceCreateRequest,
    ) -> Result<bool, Error> {
        self.ensure_device_exists(DeviceRequest::Tbpfr(request))
            .await
    }

    // Vail endpoints

    pub async fn create_vail_device(
        &self,
        request: &VailDeviceCreateRequest,
    ) -> Result<Response<VailDeviceResponse>, Error> {
        self.create_device(DeviceRequest::Vail(request)).await
    }

    pub async fn get_vail_device(&self, name: &str) -> Result<Response<VailDeviceResponse>, Error> {
        self.get_device(DeviceType::Vail, name).await
    }

    pub async fn list_vail_devices(
        &self,
        query: &PageQuery,
    ) -> Result<Response<VailDeviceListResponse>, Error> {
        self.list_devices(DeviceType::Vail, query).await
    }

    pub async fn ensure_vail_device_exists(
        &self,
        request: &VailDeviceCreateRequest,
    ) -> Result<bool, Error> {
        self.ensure_device_exists(DeviceRequest::Vail(request))
            .await
    }
}
