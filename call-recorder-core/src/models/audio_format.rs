use serde::{Deserialize, Serialize};

/// Container a capture device writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    AmrWb,
    Mpeg4,
}

/// Encoder a capture device feeds into the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioEncoder {
    AmrWb,
    HeAac,
}

/// Container, encoder and file extension that belong together.
///
/// Devices reject a container/encoder pair that does not match, so the
/// three are only ever obtained as one unit from [`AudioFormat::profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatProfile {
    pub container: OutputFormat,
    pub encoder: AudioEncoder,
    pub extension: &'static str,
}

/// User-selectable recording format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// AMR wideband in an `.amr` file.
    #[default]
    AmrWb,
    /// HE-AAC in an MPEG-4 `.m4a` file.
    Mpeg4,
}

impl AudioFormat {
    /// Map the stored preference value: `0` selects AMR-WB, anything else MPEG-4.
    pub fn from_preference(value: i64) -> Self {
        if value == 0 {
            Self::AmrWb
        } else {
            Self::Mpeg4
        }
    }

    pub fn to_preference(self) -> i64 {
        match self {
            Self::AmrWb => 0,
            Self::Mpeg4 => 1,
        }
    }

    pub fn profile(self) -> FormatProfile {
        match self {
            Self::AmrWb => FormatProfile {
                container: OutputFormat::AmrWb,
                encoder: AudioEncoder::AmrWb,
                extension: "amr",
            },
            Self::Mpeg4 => FormatProfile {
                container: OutputFormat::Mpeg4,
                encoder: AudioEncoder::HeAac,
                extension: "m4a",
            },
        }
    }

    pub fn extension(self) -> &'static str {
        self.profile().extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_zero_is_amr_everything_else_mpeg4() {
        assert_eq!(AudioFormat::from_preference(0), AudioFormat::AmrWb);
        assert_eq!(AudioFormat::from_preference(1), AudioFormat::Mpeg4);
        assert_eq!(AudioFormat::from_preference(7), AudioFormat::Mpeg4);
        assert_eq!(AudioFormat::from_preference(-1), AudioFormat::Mpeg4);
    }

    #[test]
    fn profiles_keep_container_and_encoder_paired() {
        let amr = AudioFormat::AmrWb.profile();
        assert_eq!(amr.container, OutputFormat::AmrWb);
        assert_eq!(amr.encoder, AudioEncoder::AmrWb);
        assert_eq!(amr.extension, "amr");

        let m4a = AudioFormat::Mpeg4.profile();
        assert_eq!(m4a.container, OutputFormat::Mpeg4);
        assert_eq!(m4a.encoder, AudioEncoder::HeAac);
        assert_eq!(m4a.extension, "m4a");
    }

    #[test]
    fn preference_value_survives_mapping() {
        for format in [AudioFormat::AmrWb, AudioFormat::Mpeg4] {
            assert_eq!(AudioFormat::from_preference(format.to_preference()), format);
        }
    }
}
