mod meta;
pub(crate) use self::meta::EMPTY_BODY;
pub use self::meta::{EmptyRequest, EmptyResponse, ListResult, PageInfo, Response};

mod broker;
pub use self::broker::{
    AgentConfig, AgentCreateRequest, AgentListResponse, AgentResponse, AgentType, BpAgentConfig,
    BrokerCreateRequest, BrokerListResponse, BrokerResponse, ObjectChecksum, ObjectListResponse,
    ObjectResponse, ObjectUpdateRequest, S3AgentConfig, VailAgentConfig,
};

mod client_data;
pub use self::client_data::{ClientDataListResponse, ClientDataRequest, ClientDataResponse};

mod cluster;
pub use self::cluster::{ClusterMember, ClusterMemberListResponse, ClusterResponse, SystemResponse};

mod device;
pub use self::device::{
    DeviceRequest, DeviceType, FlashbladeDeviceCreateRequest, FlashbladeDeviceListResponse,
    FlashbladeDeviceResponse, SpectraDeviceCreateRequest, SpectraDeviceListResponse,
    SpectraDeviceResponse, SpectraDeviceUpdateRequest, TbpfrDeviceCreateRequest,
    TbpfrDeviceListResponse, TbpfrDeviceResponse, VailDeviceCreateRequest, VailDeviceListResponse,
    VailDeviceResponse,
};

mod job;
pub use self::job::{
    ArchiveFile, ArchiveRequest, ByteRange, FileStatus, FileStatusListResponse, JobListResponse,
    JobRequest, JobResponse, JobStatus, JobStatusDetail, JobType, RestoreFile, RestoreRequest,
};

mod lifecycle;
pub use self::lifecycle::{
    LifecycleAction, LifecycleListResponse, LifecycleRequest, LifecycleResponse, LifecycleRule,
};

mod logset;
pub use self::logset::{LogsetListResponse, LogsetResponse};

mod rio_group;
pub use self::rio_group::{RioGroupListResponse, RioGroupRequest, RioGroupResponse};

mod user;
pub use self::user::{
    TokenCreateRequest, TokenCreateResponse, TokenKeyResponse, TokenListResponse, TokenResponse,
    UserCreateRequest, UserListResponse, UserLoginCredentials, UserResponse, UserUpdateRequest,
};
