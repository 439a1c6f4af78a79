// Copyright (c) Microsoft. All rights reserved.

mod architecture_values;
pub use self::architecture_values::ArchitectureValues;
mod block_device_mapping;
pub use self::block_device_mapping::BlockDeviceMapping;
mod cpu_options;
pub use self::cpu_options::CpuOptions;
mod create_capacity_reservation_request;
pub use self::create_capacity_reservation_request::CreateCapacityReservationRequest;
mod create_flow_logs_request;
pub use self::create_flow_logs_request::CreateFlowLogsRequest;
mod describe_capacity_reservations_request;
pub use self::describe_capacity_reservations_request::DescribeCapacityReservationsRequest;
mod describe_instances_request;
pub use self::describe_instances_request::DescribeInstancesRequest;
mod describe_instances_result;
pub use self::describe_instances_result::DescribeInstancesResult;
mod describe_network_interfaces_request;
pub use self::describe_network_interfaces_request::DescribeNetworkInterfacesRequest;
mod describe_reserved_instances_offerings_request;
pub use self::describe_reserved_instances_offerings_request::DescribeReservedInstancesOfferingsRequest;
mod describe_route_tables_request;
pub use self::describe_route_tables_request::DescribeRouteTablesRequest;
mod describe_spot_instance_requests_request;
pub use self::describe_spot_instance_requests_request::DescribeSpotInstanceRequestsRequest;
mod device_type;
pub use self::device_type::DeviceType;
mod disk_info;
pub use self::disk_info::DiskInfo;
mod ebs_block_device;
pub use self::ebs_block_device::EbsBlockDevice;
mod ebs_instance_block_device;
pub use self::ebs_instance_block_device::EbsInstanceBlockDevice;
mod filter;
pub use self::filter::Filter;
mod fleet_data;
pub use self::fleet_data::FleetData;
mod fleet_state_code;
pub use self::fleet_state_code::FleetStateCode;
mod fleet_type;
pub use self::fleet_type::FleetType;
mod group_identifier;
pub use self::group_identifier::GroupIdentifier;
mod hibernation_options;
pub use self::hibernation_options::HibernationOptions;
mod iam_instance_profile;
pub use self::iam_instance_profile::IamInstanceProfile;
mod iam_instance_profile_specification;
pub use self::iam_instance_profile_specification::IamInstanceProfileSpecification;
mod image;
pub use self::image::Image;
mod image_state;
pub use self::image_state::ImageState;
mod instance;
pub use self::instance::Instance;
mod instance_block_device_mapping;
pub use self::instance_block_device_mapping::InstanceBlockDeviceMapping;
mod instance_network_interface;
pub use self::instance_network_interface::InstanceNetworkInterface;
mod instance_state;
pub use self::instance_state::InstanceState;
mod instance_state_name;
pub use self::instance_state_name::InstanceStateName;
mod instance_storage_info;
pub use self::instance_storage_info::InstanceStorageInfo;
mod instance_type;
pub use self::instance_type::InstanceType;
mod instance_type_info;
pub use self::instance_type_info::InstanceTypeInfo;
mod internet_gateway;
pub use self::internet_gateway::InternetGateway;
mod internet_gateway_attachment;
pub use self::internet_gateway_attachment::InternetGatewayAttachment;
mod ip_permission;
pub use self::ip_permission::IpPermission;
mod ip_range;
pub use self::ip_range::IpRange;
mod ipv6_range;
pub use self::ipv6_range::Ipv6Range;
mod memory_info;
pub use self::memory_info::MemoryInfo;
mod monitoring;
pub use self::monitoring::Monitoring;
mod monitoring_state;
pub use self::monitoring_state::MonitoringState;
mod nat_gateway;
pub use self::nat_gateway::NatGateway;
mod nat_gateway_address;
pub use self::nat_gateway_address::NatGatewayAddress;
mod nat_gateway_state;
pub use self::nat_gateway_state::NatGatewayState;
mod network_info;
pub use self::network_info::NetworkInfo;
mod on_demand_options;
pub use self::on_demand_options::OnDemandOptions;
mod placement;
pub use self::placement::Placement;
mod platform_values;
pub use self::platform_values::PlatformValues;
mod processor_info;
pub use self::processor_info::ProcessorInfo;
mod product_code;
pub use self::product_code::ProductCode;
mod reservation;
pub use self::reservation::Reservation;
mod resource_type;
pub use self::resource_type::ResourceType;
mod run_instances_monitoring_enabled;
pub use self::run_instances_monitoring_enabled::RunInstancesMonitoringEnabled;
mod run_instances_request;
pub use self::run_instances_request::RunInstancesRequest;
mod security_group;
pub use self::security_group::SecurityGroup;
mod snapshot;
pub use self::snapshot::Snapshot;
mod snapshot_state;
pub use self::snapshot_state::SnapshotState;
mod spot_fleet_request_config_data;
pub use self::spot_fleet_request_config_data::SpotFleetRequestConfigData;
mod spot_options;
pub use self::spot_options::SpotOptions;
mod state_reason;
pub use self::state_reason::StateReason;
mod subnet;
pub use self::subnet::Subnet;
mod tag;
pub use self::tag::Tag;
mod tag_specification;
pub use self::tag_specification::TagSpecification;
mod target_capacity_specification;
pub use self::target_capacity_specification::TargetCapacitySpecification;
mod tenancy;
pub use self::tenancy::Tenancy;
mod user_id_group_pair;
pub use self::user_id_group_pair::UserIdGroupPair;
mod v_cpu_info;
pub use self::v_cpu_info::VCpuInfo;
mod virtualization_type;
pub use self::virtualization_type::VirtualizationType;
mod volume_type;
pub use self::volume_type::VolumeType;
mod vpc;
pub use self::vpc::Vpc;
