//!Describes link formatting configuration

use crate::header;

///Generic config trait.
///
///Each method describes single aspect of configuration
///and provided with sane defaults
pub trait Config {
    #[inline]
    ///Specifies header into which links are appended.
    ///
    ///Default is `Link`
    fn header_name() -> header::HeaderName {
        header::LINK
    }

    #[inline]
    ///Specifies whether input that already looks percent encoded
    ///should be written as it is.
    ///
    ///When `false`, every `%` is escaped.
    ///
    ///Defaults to true.
    fn check_escaped() -> bool {
        true
    }

    #[inline]
    ///Specifies separator between links inside single header value.
    ///
    ///Default is `", "`
    fn separator() -> &'static str {
        ", "
    }
}

///Default configuration.
///
///Uses default [Config](trait.Config.html) impl.
pub struct DefaultCfg;

impl Config for DefaultCfg {
}
