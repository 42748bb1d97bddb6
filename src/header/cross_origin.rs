use core::fmt;
use core::str::FromStr;

use super::LinkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
///Value of `crossorigin` link attribute.
///
///Controls CORS mode used to fetch linked resource.
pub enum CrossOrigin {
    ///Requests are made without credentials.
    Anonymous,
    ///Requests are made with credentials.
    UseCredentials,
}

impl CrossOrigin {
    ///Returns textual representation.
    pub fn as_str(&self) -> &'static str {
        match *self {
            CrossOrigin::Anonymous => "anonymous",
            CrossOrigin::UseCredentials => "use-credentials",
        }
    }
}

impl FromStr for CrossOrigin {
    type Err = LinkError;

    ///Parses value ignoring ASCII case.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.eq_ignore_ascii_case("anonymous") {
            Ok(CrossOrigin::Anonymous)
        } else if text.eq_ignore_ascii_case("use-credentials") {
            Ok(CrossOrigin::UseCredentials)
        } else {
            Err(LinkError::InvalidCrossOrigin(text.to_owned()))
        }
    }
}

impl fmt::Display for CrossOrigin {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
