use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "mandelview=debug,wgpu_core=warn"). When unset, `RUST_LOG` is used, then
/// `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// GPU stack crates that log heavily at `info`.
const NOISY_CRATES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| "info".to_owned());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&quiet_gpu_crates(&filter));
        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

/// Caps `NOISY_CRATES` at `warn` unless a directive in `filter` names them.
///
/// A directive names a crate when its target (the text before `=`, or the
/// whole directive) is the crate or one of its modules. The caps go in front
/// of any `/regex` suffix.
fn quiet_gpu_crates(filter: &str) -> String {
    let (directives, regex) = match filter.split_once('/') {
        Some((directives, regex)) => (directives, Some(regex)),
        None => (filter, None),
    };

    let targets: Vec<&str> = directives
        .split(',')
        .map(|d| d.split_once('=').map_or(d, |(target, _)| target).trim())
        .filter(|t| !t.is_empty())
        .collect();
    let names = |name: &str, target: &str| {
        target == name || target.strip_prefix(name).is_some_and(|rest| rest.starts_with("::"))
    };

    let mut out = directives.to_owned();
    for name in NOISY_CRATES {
        if targets.iter().any(|t| names(name, *t)) {
            continue;
        }
        if !out.is_empty() && !out.ends_with(',') {
            out.push(',');
        }
        out.push_str(name);
        out.push_str("=warn");
    }

    if let Some(regex) = regex {
        out.push('/');
        out.push_str(regex);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_crates_are_capped() {
        assert_eq!(
            quiet_gpu_crates("info"),
            "info,wgpu_core=warn,wgpu_hal=warn,naga=warn"
        );
    }

    #[test]
    fn explicit_directive_wins() {
        assert_eq!(
            quiet_gpu_crates("debug,wgpu_hal=trace"),
            "debug,wgpu_hal=trace,wgpu_core=warn,naga=warn"
        );
    }

    #[test]
    fn empty_filter_gets_no_leading_comma() {
        assert_eq!(quiet_gpu_crates(""), "wgpu_core=warn,wgpu_hal=warn,naga=warn");
    }

    #[test]
    fn bare_crate_directive_wins() {
        assert_eq!(
            quiet_gpu_crates("info,wgpu_hal"),
            "info,wgpu_hal,wgpu_core=warn,naga=warn"
        );
    }

    #[test]
    fn module_directive_names_its_crate() {
        assert_eq!(
            quiet_gpu_crates("naga::front=debug"),
            "naga::front=debug,wgpu_core=warn,wgpu_hal=warn"
        );
    }

    #[test]
    fn similar_names_do_not_count() {
        assert_eq!(
            quiet_gpu_crates("my_naga=debug"),
            "my_naga=debug,wgpu_core=warn,wgpu_hal=warn,naga=warn"
        );
    }

    #[test]
    fn caps_go_before_the_message_regex() {
        assert_eq!(
            quiet_gpu_crates("info/frame"),
            "info,wgpu_core=warn,wgpu_hal=warn,naga=warn/frame"
        );
    }

    #[test]
    fn bare_user_choice_survives_the_built_logger() {
        let logger = env_logger::Builder::new()
            .parse_filters(&quiet_gpu_crates("info,wgpu_hal"))
            .build();
        let debug_hal = log::Metadata::builder()
            .level(log::Level::Debug)
            .target("wgpu_hal::vulkan")
            .build();
        let debug_core = log::Metadata::builder()
            .level(log::Level::Debug)
            .target("wgpu_core::device")
            .build();
        assert!(log::Log::enabled(&logger, &debug_hal));
        assert!(!log::Log::enabled(&logger, &debug_core));
    }
}
