//!# httplink
//!
//!Builder of `Link` header values, as defined in [RFC8288](https://tools.ietf.org/html/rfc8288).
//!
//!## Features
//!
//!- Percent encoding of link targets and attribute values, that leaves already escaped input intact.
//!- Extended `title*` values as per [RFC5987](https://tools.ietf.org/html/rfc5987).
//!- `hreflang`, `type`, `anchor`, `crossorigin` and extension attributes.
//!- Appending of multiple links into single header of any [HeaderStore](header/trait.HeaderStore.html).
//!
//!## Usage
//!
//!```
//!use httplink::{append, Options};
//!use httplink::header::{HeaderMap, LINK};
//!
//!let mut headers = HeaderMap::new();
//!
//!append(&mut headers, "/related/thing", "item", Options::new().title_star("", "A related thing")).expect("To append link");
//!append(&mut headers, "/style.css", "preload", Options::new().cross_origin("Use-Credentials")).expect("To append link");
//!
//!assert_eq!(headers.get(LINK).expect("To have Link"), "</related/thing>; rel=item; title*=UTF-8''A%20related%20thing, \
//!                                                      </style.css>; rel=preload; crossorigin=\"use-credentials\"");
//!```

#![warn(missing_docs)]

pub mod utils;
pub mod header;
pub mod config;

pub use header::{Link, Options, LinkError, CrossOrigin, append, append_with, append_link, append_link_with};

pub extern crate bytes;
pub extern crate http;
pub extern crate mime;
pub extern crate percent_encoding;
