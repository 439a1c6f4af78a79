// Copyright (c) Microsoft. All rights reserved.

use log::{log, Level};

/// Logs an error and each of its causes, one line per level of the chain.
pub fn log_failure(level: Level, fail: &(dyn std::error::Error + 'static)) {
    for (depth, cause) in error_chain(fail).enumerate() {
        if depth == 0 {
            log!(level, "{}", cause);
        } else {
            log!(level, "\tcaused by: {}", cause);
        }
    }
}

/// Walks an error and its `source` chain, outermost error first.
pub fn error_chain<'a>(
    fail: &'a (dyn std::error::Error + 'static),
) -> impl Iterator<Item = &'a (dyn std::error::Error + 'static)> {
    std::iter::successors(Some(fail), |cause| cause.source())
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::{error_chain, log_failure};

    #[derive(Debug, thiserror::Error)]
    #[error("request rejected")]
    struct Outer(#[source] Middle);

    #[derive(Debug, thiserror::Error)]
    #[error("invalid block device mapping")]
    struct Middle(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("device name is empty")]
    struct Inner;

    #[test]
    fn chain_walks_outermost_first() {
        let fail = Outer(Middle(Inner));

        let rendered: Vec<String> = error_chain(&fail).map(ToString::to_string).collect();
        assert_eq!(
            vec![
                "request rejected".to_owned(),
                "invalid block device mapping".to_owned(),
                "device name is empty".to_owned(),
            ],
            rendered
        );
    }

    #[test]
    fn chain_of_leaf_error_is_just_the_error() {
        let fail = Inner;
        assert_eq!(1, error_chain(&fail).count());
    }

    #[test]
    fn log_failure_accepts_any_error() {
        // Rendering is covered above; this exercises the log path end to end.
        log_failure(Level::Warn, &Outer(Middle(Inner)));
    }
}
