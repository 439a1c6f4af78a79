// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// InstanceType : An instance sizing offered by the service.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum InstanceType {
    T1Micro,
    T2Nano,
    T2Micro,
    T2Small,
    T2Medium,
    T2Large,
    T2Xlarge,
    T22xlarge,
    T3Nano,
    T3Micro,
    T3Small,
    T3Medium,
    T3Large,
    T3Xlarge,
    T32xlarge,
    M5Large,
    M5Xlarge,
    M52xlarge,
    M54xlarge,
    M512xlarge,
    M524xlarge,
    M5Metal,
    C5Large,
    C5Xlarge,
    C52xlarge,
    C54xlarge,
    C59xlarge,
    C518xlarge,
    C5Metal,
    R5Large,
    R5Xlarge,
    R52xlarge,
    R54xlarge,
    R512xlarge,
    R524xlarge,
    R5Metal,
    X116xlarge,
    X132xlarge,
    I3Large,
    I3Xlarge,
    I32xlarge,
    I34xlarge,
    I38xlarge,
    I316xlarge,
    I3Metal,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl InstanceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::T1Micro => "t1.micro",
            Self::T2Nano => "t2.nano",
            Self::T2Micro => "t2.micro",
            Self::T2Small => "t2.small",
            Self::T2Medium => "t2.medium",
            Self::T2Large => "t2.large",
            Self::T2Xlarge => "t2.xlarge",
            Self::T22xlarge => "t2.2xlarge",
            Self::T3Nano => "t3.nano",
            Self::T3Micro => "t3.micro",
            Self::T3Small => "t3.small",
            Self::T3Medium => "t3.medium",
            Self::T3Large => "t3.large",
            Self::T3Xlarge => "t3.xlarge",
            Self::T32xlarge => "t3.2xlarge",
            Self::M5Large => "m5.large",
            Self::M5Xlarge => "m5.xlarge",
            Self::M52xlarge => "m5.2xlarge",
            Self::M54xlarge => "m5.4xlarge",
            Self::M512xlarge => "m5.12xlarge",
            Self::M524xlarge => "m5.24xlarge",
            Self::M5Metal => "m5.metal",
            Self::C5Large => "c5.large",
            Self::C5Xlarge => "c5.xlarge",
            Self::C52xlarge => "c5.2xlarge",
            Self::C54xlarge => "c5.4xlarge",
            Self::C59xlarge => "c5.9xlarge",
            Self::C518xlarge => "c5.18xlarge",
            Self::C5Metal => "c5.metal",
            Self::R5Large => "r5.large",
            Self::R5Xlarge => "r5.xlarge",
            Self::R52xlarge => "r5.2xlarge",
            Self::R54xlarge => "r5.4xlarge",
            Self::R512xlarge => "r5.12xlarge",
            Self::R524xlarge => "r5.24xlarge",
            Self::R5Metal => "r5.metal",
            Self::X116xlarge => "x1.16xlarge",
            Self::X132xlarge => "x1.32xlarge",
            Self::I3Large => "i3.large",
            Self::I3Xlarge => "i3.xlarge",
            Self::I32xlarge => "i3.2xlarge",
            Self::I34xlarge => "i3.4xlarge",
            Self::I38xlarge => "i3.8xlarge",
            Self::I316xlarge => "i3.16xlarge",
            Self::I3Metal => "i3.metal",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "t1.micro", "t2.nano", "t2.micro", "t2.small",
            "t2.medium", "t2.large", "t2.xlarge", "t2.2xlarge",
            "t3.nano", "t3.micro", "t3.small", "t3.medium",
            "t3.large", "t3.xlarge", "t3.2xlarge", "m5.large",
            "m5.xlarge", "m5.2xlarge", "m5.4xlarge", "m5.12xlarge",
            "m5.24xlarge", "m5.metal", "c5.large", "c5.xlarge",
            "c5.2xlarge", "c5.4xlarge", "c5.9xlarge", "c5.18xlarge",
            "c5.metal", "r5.large", "r5.xlarge", "r5.2xlarge",
            "r5.4xlarge", "r5.12xlarge", "r5.24xlarge", "r5.metal",
            "x1.16xlarge", "x1.32xlarge", "i3.large", "i3.xlarge",
            "i3.2xlarge", "i3.4xlarge", "i3.8xlarge", "i3.16xlarge",
            "i3.metal",
        ]
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for InstanceType {
    fn from(value: &str) -> Self {
        match value {
            "t1.micro" => Self::T1Micro,
            "t2.nano" => Self::T2Nano,
            "t2.micro" => Self::T2Micro,
            "t2.small" => Self::T2Small,
            "t2.medium" => Self::T2Medium,
            "t2.large" => Self::T2Large,
            "t2.xlarge" => Self::T2Xlarge,
            "t2.2xlarge" => Self::T22xlarge,
            "t3.nano" => Self::T3Nano,
            "t3.micro" => Self::T3Micro,
            "t3.small" => Self::T3Small,
            "t3.medium" => Self::T3Medium,
            "t3.large" => Self::T3Large,
            "t3.xlarge" => Self::T3Xlarge,
            "t3.2xlarge" => Self::T32xlarge,
            "m5.large" => Self::M5Large,
            "m5.xlarge" => Self::M5Xlarge,
            "m5.2xlarge" => Self::M52xlarge,
            "m5.4xlarge" => Self::M54xlarge,
            "m5.12xlarge" => Self::M512xlarge,
            "m5.24xlarge" => Self::M524xlarge,
            "m5.metal" => Self::M5Metal,
            "c5.large" => Self::C5Large,
            "c5.xlarge" => Self::C5Xlarge,
            "c5.2xlarge" => Self::C52xlarge,
            "c5.4xlarge" => Self::C54xlarge,
            "c5.9xlarge" => Self::C59xlarge,
            "c5.18xlarge" => Self::C518xlarge,
            "c5.metal" => Self::C5Metal,
            "r5.large" => Self::R5Large,
            "r5.xlarge" => Self::R5Xlarge,
            "r5.2xlarge" => Self::R52xlarge,
            "r5.4xlarge" => Self::R54xlarge,
            "r5.12xlarge" => Self::R512xlarge,
            "r5.24xlarge" => Self::R524xlarge,
            "r5.metal" => Self::R5Metal,
            "x1.16xlarge" => Self::X116xlarge,
            "x1.32xlarge" => Self::X132xlarge,
            "i3.large" => Self::I3Large,
            "i3.xlarge" => Self::I3Xlarge,
            "i3.2xlarge" => Self::I32xlarge,
            "i3.4xlarge" => Self::I34xlarge,
            "i3.8xlarge" => Self::I38xlarge,
            "i3.16xlarge" => Self::I316xlarge,
            "i3.metal" => Self::I3Metal,
            other => {
                log::trace!("unrecognized instance type literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for InstanceType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<InstanceType> for String {
    fn from(value: InstanceType) -> Self {
        match value {
            InstanceType::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceType;

    #[test]
    fn every_known_literal_round_trips() {
        for literal in InstanceType::values() {
            let parsed = InstanceType::from(*literal);
            assert!(!matches!(parsed, InstanceType::Other(_)), "{}", literal);
            assert_eq!(*literal, String::from(parsed));
        }
    }

    #[test]
    fn service_side_additions_are_tolerated() {
        let parsed = InstanceType::from("u-6tb1.metal");
        assert_eq!(InstanceType::Other("u-6tb1.metal".to_owned()), parsed);
        assert_eq!("u-6tb1.metal", parsed.as_str());
    }
}
