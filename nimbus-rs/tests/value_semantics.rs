// Copyright (c) Microsoft. All rights reserved.

//! Cross-cutting value-object contract: structural equality, the stable
//! fingerprint, fluent accumulation, and the `{Key: value}` rendering, all
//! exercised through the public model API.

#![deny(rust_2018_idioms, warnings)]
#![allow(clippy::eq_op)]

use std::collections::{HashMap, HashSet};

use chrono::DateTime;
use proptest::prelude::*;
use test_case::test_case;

use nimbus::models::{
    CreateFlowLogsRequest, DescribeInstancesRequest, DescribeRouteTablesRequest, Filter,
    FleetType, GroupIdentifier, Instance, InstanceState, InstanceStateName, InstanceType,
    Monitoring, MonitoringState, ResourceType, SpotFleetRequestConfigData, Tag,
    TagSpecification,
};
use nimbus_utils::{serde_clone, StableHash};

fn tag(key: &str, value: &str) -> Tag {
    Tag::new()
        .with_key(key.to_owned())
        .with_value(value.to_owned())
}

/// The same logical instance, built twice: once through `set_*` mutation and
/// once as a single fluent chain.
fn sample_instance_via_setters() -> Instance {
    let launch_time = DateTime::from_timestamp_millis(1_577_836_800_000).unwrap();

    let mut state = InstanceState::new();
    state.set_code(16);
    state.set_name(InstanceStateName::Running);

    let mut monitoring = Monitoring::new();
    monitoring.set_state(MonitoringState::Enabled);

    let mut group = GroupIdentifier::new();
    group.set_group_id("sg-903004f8".to_owned());
    group.set_group_name("default".to_owned());

    let mut instance = Instance::new();
    instance.set_instance_id("i-1234567890abcdef0".to_owned());
    instance.set_instance_type(InstanceType::T3Micro);
    instance.set_launch_time(launch_time);
    instance.set_monitoring(monitoring);
    instance.set_state(state);
    instance.set_security_groups(vec![group]);
    instance.set_tags(vec![tag("Name", "web-1"), tag("env", "prod")]);
    instance
}

fn sample_instance_via_chain() -> Instance {
    let launch_time = DateTime::from_timestamp_millis(1_577_836_800_000).unwrap();

    Instance::new()
        .with_instance_id("i-1234567890abcdef0".to_owned())
        .with_instance_type("t3.micro")
        .with_launch_time(launch_time)
        .with_monitoring(Monitoring::new().with_state("enabled"))
        .with_state(InstanceState::new().with_code(16).with_name("running"))
        .with_security_group(
            GroupIdentifier::new()
                .with_group_id("sg-903004f8".to_owned())
                .with_group_name("default".to_owned()),
        )
        .with_tag(tag("Name", "web-1"))
        .with_tag(tag("env", "prod"))
}

#[test]
fn equality_is_reflexive_and_symmetric() {
    let a = sample_instance_via_setters();
    let b = sample_instance_via_setters();

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
}

#[test]
fn equal_objects_fingerprint_identically() {
    let a = sample_instance_via_setters();
    let b = sample_instance_via_chain();

    assert_eq!(a, b);
    assert_eq!(a.stable_hash(), b.stable_hash());
}

#[test]
fn models_work_as_map_and_set_keys() {
    let mut counts: HashMap<Tag, i32> = HashMap::new();
    *counts.entry(tag("env", "prod")).or_insert(0) += 1;
    *counts.entry(tag("env", "prod")).or_insert(0) += 1;
    *counts.entry(tag("env", "dev")).or_insert(0) += 1;

    assert_eq!(2, counts.len());
    assert_eq!(Some(&2), counts.get(&tag("env", "prod")));

    let filters: HashSet<Filter> = [
        Filter::new().with_name("vpc-id".to_owned()),
        Filter::new().with_name("vpc-id".to_owned()),
    ]
    .into_iter()
    .collect();
    assert_eq!(1, filters.len());
}

#[test]
fn unset_field_breaks_equality_both_directions() {
    let set = tag("env", "prod");
    let mut unset = tag("env", "prod");
    unset.reset_value();

    assert_ne!(set, unset);
    assert_ne!(unset, set);
}

#[test]
fn all_unset_objects_of_one_type_are_equal() {
    assert_eq!(Instance::new(), Instance::new());
    assert_eq!(
        Instance::new().stable_hash(),
        Instance::new().stable_hash()
    );
}

#[test]
fn stored_collection_is_independent_of_the_caller_copy() {
    let mut retained = vec![tag("a", "1")];

    let mut spec = TagSpecification::new();
    spec.set_tags(retained.clone());

    retained.push(tag("b", "2"));

    assert_eq!(Some(&[tag("a", "1")][..]), spec.tags());
}

#[test]
fn accumulator_appends_in_order() {
    let filter = Filter::new()
        .with_value("a".to_owned())
        .with_value("b".to_owned());

    assert_eq!(Some(&["a".to_owned(), "b".to_owned()][..]), filter.values());
}

#[test]
fn plural_with_and_setter_replace_while_reset_clears() {
    let mut filter = Filter::new()
        .with_values(vec!["a".to_owned()])
        .with_values(vec!["b".to_owned()]);
    assert_eq!(Some(&["b".to_owned()][..]), filter.values());

    filter.set_values(vec!["c".to_owned()]);
    assert_eq!(Some(&["c".to_owned()][..]), filter.values());

    filter.reset_values();
    assert_eq!(None, filter.values());

    // replace-then-append lands on the replaced list
    let mixed = Filter::new()
        .with_values(vec!["x".to_owned()])
        .with_value("y".to_owned());
    assert_eq!(Some(&["x".to_owned(), "y".to_owned()][..]), mixed.values());
}

#[test]
fn rendering_omits_unset_fields_in_declared_order() {
    let mut state = InstanceState::new();
    state.set_name("running");
    assert_eq!("{Name: running}", state.to_string());

    state.set_code(16);
    assert_eq!("{Code: 16,Name: running}", state.to_string());

    state.reset_name();
    assert_eq!("{Code: 16}", state.to_string());
}

#[test]
fn rendering_an_empty_object_yields_bare_braces() {
    assert_eq!("{}", Instance::new().to_string());
    assert_eq!("{}", Tag::new().to_string());
}

#[test]
fn rendering_nests_models_and_brackets_lists() {
    let spec = TagSpecification::new()
        .with_resource_type(ResourceType::Instance)
        .with_tag(tag("Name", "web-1"))
        .with_tag(tag("env", "prod"));

    assert_eq!(
        "{ResourceType: instance,Tags: [{Key: Name,Value: web-1}, {Key: env,Value: prod}]}",
        spec.to_string()
    );
}

#[test]
fn typed_enum_and_literal_store_identical_state() {
    let mut via_enum = Instance::new();
    via_enum.set_instance_type(InstanceType::T3Micro);

    let mut via_literal = Instance::new();
    via_literal.set_instance_type("t3.micro");

    assert_eq!(via_enum, via_literal);
    assert_eq!(via_enum.stable_hash(), via_literal.stable_hash());
    assert_eq!(Some("t3.micro"), via_enum.instance_type());
}

#[test]
fn unrecognized_literals_are_stored_verbatim() {
    let mut instance = Instance::new();
    instance.set_instance_type("z9.colossal");
    assert_eq!(Some("z9.colossal"), instance.instance_type());

    // and survive the vocabulary round trip
    let parsed = InstanceType::from("z9.colossal");
    assert_eq!("z9.colossal", String::from(parsed));
}

#[test]
fn setter_and_fluent_paths_build_the_same_object() {
    let via_setters = sample_instance_via_setters();
    let via_chain = sample_instance_via_chain();

    assert_eq!(via_setters, via_chain);
    assert_eq!(via_setters.stable_hash(), via_chain.stable_hash());
    assert_eq!(via_setters.to_string(), via_chain.to_string());
}

#[test]
fn serde_round_trip_preserves_equality_and_fingerprint() {
    let original = sample_instance_via_setters();
    let copy = serde_clone(&original).unwrap();

    assert_eq!(original, copy);
    assert_eq!(original.stable_hash(), copy.stable_hash());
}

#[test]
fn flow_log_request_accumulates_and_renders() {
    let request = CreateFlowLogsRequest::new()
        .with_resource_id("vpc-0a1b2c3d".to_owned())
        .with_resource_id("subnet-9f8e7d6c".to_owned())
        .with_resource_type("VPC".to_owned())
        .with_traffic_type("ALL".to_owned());

    assert_eq!(
        Some(&["vpc-0a1b2c3d".to_owned(), "subnet-9f8e7d6c".to_owned()][..]),
        request.resource_ids()
    );
    assert_eq!(
        "{ResourceIds: [vpc-0a1b2c3d, subnet-9f8e7d6c],ResourceType: VPC,TrafficType: ALL}",
        request.to_string()
    );
}

#[test]
fn spot_fleet_config_renders_and_serializes_type_under_the_wire_name() {
    let config = SpotFleetRequestConfigData::new()
        .with_fleet_type(FleetType::Maintain)
        .with_target_capacity(10);

    assert_eq!("{TargetCapacity: 10,Type: maintain}", config.to_string());
    assert_eq!(
        r#"{"TargetCapacity":10,"Type":"maintain"}"#,
        serde_json::to_string(&config).unwrap()
    );

    let mut via_literal = SpotFleetRequestConfigData::new();
    via_literal.set_fleet_type("maintain");
    via_literal.set_target_capacity(10);
    assert_eq!(config, via_literal);
    assert_eq!(config.stable_hash(), via_literal.stable_hash());
}

#[test]
fn describe_route_tables_request_keeps_the_value_contract() {
    let a = DescribeRouteTablesRequest::new()
        .with_filter(Filter::new().with_name("vpc-id".to_owned()))
        .with_route_table_id("rtb-1".to_owned())
        .with_route_table_id("rtb-2".to_owned());

    let mut b = DescribeRouteTablesRequest::new();
    b.set_filters(vec![Filter::new().with_name("vpc-id".to_owned())]);
    b.set_route_table_ids(vec!["rtb-1".to_owned(), "rtb-2".to_owned()]);

    assert_eq!(a, b);
    assert_eq!(a.stable_hash(), b.stable_hash());
    assert_eq!(a.to_string(), b.to_string());

    b.reset_route_table_ids();
    assert_ne!(a, b);
}

#[test]
fn serialization_skips_unset_fields() {
    let json = serde_json::to_string(&tag("env", "prod")).unwrap();
    assert_eq!(r#"{"Key":"env","Value":"prod"}"#, json);

    let mut partial = Tag::new();
    partial.set_key("env".to_owned());
    assert_eq!(r#"{"Key":"env"}"#, serde_json::to_string(&partial).unwrap());
}

#[test_case("pending")]
#[test_case("running")]
#[test_case("shutting-down")]
#[test_case("terminated")]
#[test_case("stopping")]
#[test_case("stopped")]
fn instance_state_names_round_trip(literal: &str) {
    assert_eq!(literal, String::from(InstanceStateName::from(literal)));
}

#[test_case("t1.micro")]
#[test_case("t3.micro")]
#[test_case("m5.24xlarge")]
#[test_case("i3.metal")]
fn instance_types_round_trip(literal: &str) {
    assert_eq!(literal, String::from(InstanceType::from(literal)));
}

// known-answer fingerprints, pinned so other SDK ports can reproduce them
#[test_case(None, None, 961; "all unset")]
#[test_case(Some("a"), None, 3968; "key only")]
#[test_case(None, Some("a"), 1058; "value only")]
fn tag_fingerprint_vectors(key: Option<&str>, value: Option<&str>, expected: i32) {
    let mut tag = Tag::new();
    if let Some(key) = key {
        tag.set_key(key.to_owned());
    }
    if let Some(value) = value {
        tag.set_value(value.to_owned());
    }
    assert_eq!(expected, tag.stable_hash());
}

prop_compose! {
    fn arb_tag()(key in proptest::option::of("[a-zA-Z0-9:_-]{0,12}"),
                 value in proptest::option::of("[a-zA-Z0-9:_-]{0,12}")) -> Tag {
        let mut tag = Tag::new();
        if let Some(key) = key {
            tag.set_key(key);
        }
        if let Some(value) = value {
            tag.set_value(value);
        }
        tag
    }
}

prop_compose! {
    fn arb_filter()(name in proptest::option::of("[a-z.-]{1,16}"),
                    values in proptest::option::of(
                        proptest::collection::vec("[a-z0-9-]{0,8}", 0..4))) -> Filter {
        let mut filter = Filter::new();
        if let Some(name) = name {
            filter.set_name(name);
        }
        if let Some(values) = values {
            filter.set_values(values);
        }
        filter
    }
}

prop_compose! {
    fn arb_describe_request()(filters in proptest::option::of(
                                  proptest::collection::vec(arb_filter(), 0..3)),
                              ids in proptest::option::of(
                                  proptest::collection::vec("i-[0-9a-f]{8}", 0..3)),
                              dry_run in proptest::option::of(any::<bool>()),
                              max_results in proptest::option::of(any::<i32>()))
                              -> DescribeInstancesRequest {
        let mut request = DescribeInstancesRequest::new();
        if let Some(filters) = filters {
            request.set_filters(filters);
        }
        if let Some(ids) = ids {
            request.set_instance_ids(ids);
        }
        if let Some(dry_run) = dry_run {
            request.set_dry_run(dry_run);
        }
        if let Some(max_results) = max_results {
            request.set_max_results(max_results);
        }
        request
    }
}

proptest! {
    #[test]
    fn clones_stay_equal_and_fingerprint_identically(request in arb_describe_request()) {
        let copy = request.clone();
        prop_assert_eq!(&request, &copy);
        prop_assert_eq!(request.stable_hash(), copy.stable_hash());
    }

    #[test]
    fn rendering_is_deterministic(tag in arb_tag()) {
        prop_assert_eq!(tag.to_string(), tag.clone().to_string());
    }

    #[test]
    fn equal_filters_collide_in_a_set(filter in arb_filter()) {
        let mut set = HashSet::new();
        set.insert(filter.clone());
        set.insert(filter);
        prop_assert_eq!(1, set.len());
    }
}
