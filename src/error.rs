use std::fmt;

/// Errors produced by the viewer's camera, turbulence and scene types.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// Viewport width or height was zero.
    InvalidViewport { width: u32, height: u32 },
    /// Clip planes not satisfying `0 < near < far`.
    InvalidClipPlanes { near: f32, far: f32 },
    /// Field of view outside `(0, 180)` degrees.
    InvalidFieldOfView(f32),
    /// A sampling range with `min > max` or a non-finite bound or span.
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    /// Camera movement or rotation step that is not finite and positive.
    InvalidStep { name: &'static str, value: f32 },
    /// A zero-length vector, or a direction parallel to up.
    DegenerateVector(&'static str),
    /// Selection index past the end of a scene collection.
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {width}x{height}: both sides must be positive")
            }
            Self::InvalidClipPlanes { near, far } => {
                write!(f, "invalid clip planes near={near} far={far}: need 0 < near < far")
            }
            Self::InvalidFieldOfView(fov) => {
                write!(f, "invalid field of view {fov}: must be within (0, 180) degrees")
            }
            Self::InvalidRange { name, min, max } => {
                write!(f, "invalid {name} range [{min}, {max}]")
            }
            Self::InvalidStep { name, value } => {
                write!(f, "invalid {name} {value}: must be finite and positive")
            }
            Self::DegenerateVector(what) => write!(f, "degenerate {what} vector"),
            Self::IndexOutOfRange { what, index, len } => {
                write!(f, "{what} index {index} out of range (have {len})")
            }
        }
    }
}

impl std::error::Error for ViewerError {}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_values() {
        let err = ViewerError::InvalidViewport { width: 0, height: 600 };
        let msg = err.to_string();
        assert!(msg.contains("0x600"));

        let err = ViewerError::InvalidRange {
            name: "phase",
            min: 2.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "invalid phase range [2, 1]");

        let err = ViewerError::InvalidStep {
            name: "move step",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid move step -1: must be finite and positive");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ViewerError::DegenerateVector("up"));
        assert_eq!(err.to_string(), "degenerate up vector");
    }
}
