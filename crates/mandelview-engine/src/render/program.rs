//! Shader program builder.
//!
//! A program is one WGSL module holding a vertex and a fragment entry point.
//! Building it runs two checks on the CPU, mirroring the compile and link
//! steps of a classic GL program:
//!
//! - compile: the WGSL front end parses the source
//! - link: the module validates and both entry points exist with the right
//!   stage
//!
//! Failures carry the rendered diagnostic so the caller can log it and stop
//! before a window or device exists.

use std::fmt;

use naga::valid::{Capabilities, ValidationFlags, Validator};

/// Why a program failed to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// The source did not parse.
    Compile { label: String, log: String },
    /// The module parsed but does not form a usable vertex + fragment pair.
    Link { label: String, log: String },
}

impl ProgramError {
    pub fn label(&self) -> &str {
        match self {
            ProgramError::Compile { label, .. } | ProgramError::Link { label, .. } => label,
        }
    }

    /// Diagnostic text from the failed step.
    pub fn log(&self) -> &str {
        match self {
            ProgramError::Compile { log, .. } | ProgramError::Link { log, .. } => log,
        }
    }
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::Compile { label, log } => {
                write!(f, "shader program `{label}` failed to compile:\n{log}")
            }
            ProgramError::Link { label, log } => {
                write!(f, "shader program `{label}` failed to link:\n{log}")
            }
        }
    }
}

impl std::error::Error for ProgramError {}

/// A checked WGSL program, ready to be turned into a render pipeline.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    label: String,
    source: String,
    vertex_entry: String,
    fragment_entry: String,
}

impl ShaderProgram {
    /// Compiles and links `source`. Failures are logged at `error` and returned.
    pub fn build(
        label: impl Into<String>,
        source: impl Into<String>,
        vertex_entry: &str,
        fragment_entry: &str,
    ) -> Result<Self, ProgramError> {
        let label = label.into();
        let source = source.into();

        if let Err(err) = check(&label, &source, vertex_entry, fragment_entry) {
            log::error!("{err}");
            return Err(err);
        }

        log::debug!("shader program `{label}` built ({vertex_entry}, {fragment_entry})");
        Ok(Self {
            label,
            source,
            vertex_entry: vertex_entry.to_owned(),
            fragment_entry: fragment_entry.to_owned(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vertex_entry(&self) -> &str {
        &self.vertex_entry
    }

    pub fn fragment_entry(&self) -> &str {
        &self.fragment_entry
    }

    /// Uploads the already-checked source to the device.
    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.label.as_str()),
            source: wgpu::ShaderSource::Wgsl(self.source.as_str().into()),
        })
    }
}

fn check(
    label: &str,
    source: &str,
    vertex_entry: &str,
    fragment_entry: &str,
) -> Result<(), ProgramError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ProgramError::Compile {
        label: label.to_owned(),
        log: e.emit_to_string(source),
    })?;

    let link_err = |log: String| ProgramError::Link {
        label: label.to_owned(),
        log,
    };

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| link_err(e.emit_to_string(source)))?;

    for (name, stage) in [
        (vertex_entry, naga::ShaderStage::Vertex),
        (fragment_entry, naga::ShaderStage::Fragment),
    ] {
        let found = module
            .entry_points
            .iter()
            .any(|ep| ep.name == name && ep.stage == stage);
        if !found {
            return Err(link_err(format!("no {stage:?} entry point named `{name}`")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSTHROUGH: &str = r#"
@vertex
fn vs_main(@location(0) pos: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(pos, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.0, 1.0, 1.0);
}
"#;

    #[test]
    fn valid_program_builds() {
        let program = ShaderProgram::build("passthrough", PASSTHROUGH, "vs_main", "fs_main").unwrap();
        assert_eq!(program.label(), "passthrough");
        assert_eq!(program.vertex_entry(), "vs_main");
        assert_eq!(program.fragment_entry(), "fs_main");
    }

    #[test]
    fn syntax_error_is_a_compile_error() {
        let err = ShaderProgram::build("broken", "@fragment fn fs_main( {", "vs_main", "fs_main")
            .unwrap_err();
        assert!(matches!(err, ProgramError::Compile { .. }));
        assert_eq!(err.label(), "broken");
        assert!(!err.log().is_empty());
    }

    #[test]
    fn type_error_is_a_link_error() {
        let src = r#"
@vertex
fn vs_main() -> @builtin(position) vec4<f32> {
    return vec4<f32>(0.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    let x: f32 = 1u;
    return vec4<f32>(x);
}
"#;
        let err = ShaderProgram::build("typed", src, "vs_main", "fs_main").unwrap_err();
        // naga reports some type mismatches while lowering, others while validating.
        assert!(matches!(err, ProgramError::Compile { .. } | ProgramError::Link { .. }));
    }

    #[test]
    fn missing_entry_point_is_a_link_error() {
        let err = ShaderProgram::build("passthrough", PASSTHROUGH, "vs_main", "main").unwrap_err();
        assert!(matches!(err, ProgramError::Link { .. }));
        assert!(err.log().contains("`main`"));
    }

    #[test]
    fn entry_point_with_wrong_stage_is_a_link_error() {
        let err = ShaderProgram::build("swapped", PASSTHROUGH, "fs_main", "vs_main").unwrap_err();
        assert!(matches!(err, ProgramError::Link { .. }));
    }

    #[test]
    fn display_names_the_step() {
        let err = ProgramError::Link {
            label: "p".into(),
            log: "boom".into(),
        };
        assert_eq!(err.to_string(), "shader program `p` failed to link:\nboom");
    }
}
