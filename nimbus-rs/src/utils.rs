// Copyright (c) Microsoft. All rights reserved.

use std::str::FromStr;

use crate::models::{DescribeInstancesRequest, Filter, RunInstancesRequest};

impl FromStr for RunInstancesRequest {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl FromStr for DescribeInstancesRequest {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Parses the `Name=<name>,Values=<v1>,<v2>` shorthand command-line front
/// ends use for describe filters.
///
/// `Name=` must appear exactly once and must not be empty. `Values=` is
/// optional; every comma-separated token after it belongs to the value list,
/// so values themselves may not contain commas. Value tokens may be empty.
pub fn parse_filter(expression: &str) -> Result<Filter, String> {
    let mut name = None;
    let mut values: Option<Vec<String>> = None;

    for segment in expression.split(',') {
        if let Some(rest) = segment.strip_prefix("Name=") {
            if rest.is_empty() {
                return Err(format!(
                    "filter expression [{}] has an empty Name",
                    expression
                ));
            }
            if name.replace(rest.to_owned()).is_some() {
                return Err(format!(
                    "duplicate Name in filter expression [{}]",
                    expression
                ));
            }
        } else if let Some(rest) = segment.strip_prefix("Values=") {
            if values.replace(vec![rest.to_owned()]).is_some() {
                return Err(format!(
                    "duplicate Values in filter expression [{}]",
                    expression
                ));
            }
        } else if let Some(values) = values.as_mut() {
            values.push(segment.to_owned());
        } else {
            return Err(format!(
                "unexpected segment {:?} in filter expression [{}]",
                segment, expression
            ));
        }
    }

    let name =
        name.ok_or_else(|| format!("filter expression [{}] is missing Name", expression))?;

    let mut filter = Filter::new().with_name(name);
    if let Some(values) = values {
        filter.set_values(values);
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use log::Level;
    use proptest::prelude::*;
    use serde::Deserialize;
    use serde_json::json;
    use test_case::test_case;

    use nimbus_utils::log_failure;

    use super::parse_filter;
    use crate::models::{DescribeInstancesRequest, RunInstancesRequest};

    /// A launch document as a front end would store it: the embedded request
    /// may be spelled inline or as a pre-serialized JSON string.
    #[derive(Debug, Deserialize)]
    struct LaunchPlan {
        #[serde(rename = "Name")]
        name: String,
        #[serde(
            rename = "Request",
            default,
            deserialize_with = "nimbus_utils::string_or_struct"
        )]
        request: RunInstancesRequest,
    }

    #[test]
    fn run_instances_request_from_json_str() {
        let body = json!({
            "ImageId": "img-0123456789abcdef0",
            "InstanceType": "t3.micro",
            "MinCount": 1,
            "MaxCount": 4,
            "SecurityGroupIds": ["sg-12345"]
        })
        .to_string();

        let request = RunInstancesRequest::from_str(&body).unwrap();
        assert_eq!(Some("img-0123456789abcdef0"), request.image_id());
        assert_eq!(Some("t3.micro"), request.instance_type());
        assert_eq!(Some(1), request.min_count());
        assert_eq!(Some(4), request.max_count());
        assert_eq!(
            Some(&["sg-12345".to_owned()][..]),
            request.security_group_ids()
        );
    }

    #[test]
    fn describe_instances_request_from_json_str() {
        let body = json!({
            "InstanceIds": ["i-1", "i-2"],
            "MaxResults": 100
        })
        .to_string();

        let request = DescribeInstancesRequest::from_str(&body).unwrap();
        assert_eq!(
            Some(&["i-1".to_owned(), "i-2".to_owned()][..]),
            request.instance_ids()
        );
        assert_eq!(Some(100), request.max_results());
        assert_eq!(None, request.next_token());
    }

    #[test]
    fn request_from_malformed_str_fails() {
        let err = RunInstancesRequest::from_str("not json").unwrap_err();
        log_failure(Level::Warn, &err);
    }

    #[test]
    fn launch_plan_embeds_request_as_map() {
        let doc = json!({
            "Name": "web-tier",
            "Request": {
                "ImageId": "img-0123456789abcdef0",
                "MinCount": 1,
                "MaxCount": 2
            }
        })
        .to_string();

        let plan: LaunchPlan = serde_json::from_str(&doc).unwrap();
        assert_eq!("web-tier", plan.name);
        assert_eq!(Some("img-0123456789abcdef0"), plan.request.image_id());
        assert_eq!(Some(2), plan.request.max_count());
    }

    #[test]
    fn launch_plan_embeds_request_as_string() {
        let request_json = json!({
            "ImageId": "img-0123456789abcdef0",
            "InstanceType": "t3.micro"
        })
        .to_string();
        let doc = json!({
            "Name": "web-tier",
            "Request": request_json
        })
        .to_string();

        let plan: LaunchPlan = serde_json::from_str(&doc).unwrap();
        assert_eq!(Some("t3.micro"), plan.request.instance_type());
    }

    #[test]
    fn launch_plan_without_request_falls_back_to_empty() {
        let plan: LaunchPlan = serde_json::from_str(r#"{"Name": "bare"}"#).unwrap();
        assert_eq!(RunInstancesRequest::new(), plan.request);
    }

    #[test]
    fn launch_plan_with_garbage_request_string_fails() {
        let doc = json!({
            "Name": "bad",
            "Request": "not a request body"
        })
        .to_string();

        assert!(serde_json::from_str::<LaunchPlan>(&doc).is_err());
    }

    #[test]
    fn parse_filter_name_and_values() {
        let filter = parse_filter("Name=vpc-id,Values=vpc-1,vpc-2").unwrap();
        assert_eq!(Some("vpc-id"), filter.name());
        assert_eq!(
            Some(&["vpc-1".to_owned(), "vpc-2".to_owned()][..]),
            filter.values()
        );
    }

    #[test]
    fn parse_filter_name_only_leaves_values_unset() {
        let filter = parse_filter("Name=instance-state-name").unwrap();
        assert_eq!(Some("instance-state-name"), filter.name());
        assert_eq!(None, filter.values());
    }

    #[test]
    fn parse_filter_accepts_values_before_name() {
        let filter = parse_filter("Values=running,Name=instance-state-name").unwrap();
        assert_eq!(Some("instance-state-name"), filter.name());
        assert_eq!(Some(&["running".to_owned()][..]), filter.values());
    }

    #[test_case(""; "empty expression")]
    #[test_case("Values=a,b"; "missing name")]
    #[test_case("Name="; "empty name")]
    #[test_case("Name=,Values=a"; "empty name with values")]
    #[test_case("Name=a,Name=b"; "duplicate name")]
    #[test_case("Name=a,Values=b,Values=c"; "duplicate values")]
    #[test_case("stray,Name=a"; "segment before values")]
    fn parse_filter_rejects(expression: &str) {
        assert!(parse_filter(expression).is_err());
    }

    #[test]
    fn parse_filter_keeps_empty_value_tokens() {
        let filter = parse_filter("Name=tag:env,Values=,prod").unwrap();
        assert_eq!(
            Some(&[String::new(), "prod".to_owned()][..]),
            filter.values()
        );
    }

    proptest! {
        #[test]
        fn parse_filter_never_panics(expression in "\\PC*") {
            let _ = parse_filter(&expression);
        }

        #[test]
        fn parse_filter_roundtrips_simple_names(name in "[a-z-]{1,20}") {
            let filter = parse_filter(&format!("Name={}", name)).unwrap();
            prop_assert_eq!(Some(name.as_str()), filter.name());
        }
    }
}
