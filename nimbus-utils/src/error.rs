// Copyright (c) Microsoft. All rights reserved.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not clone value via serde")]
    SerdeClone(#[source] serde_json::Error),
}
