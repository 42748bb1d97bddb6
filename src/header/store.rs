use std::io::Write;

use bytes::Bytes;

use crate::config::{Config, DefaultCfg};
use crate::utils::BytesWriter;
use super::{HeaderMap, HeaderName, HeaderValue, Link, LinkError, Options};

///Storage of headers into which links are appended.
pub trait HeaderStore {
    ///Returns first value of header, if any.
    fn get(&self, name: &HeaderName) -> Option<&[u8]>;

    ///Sets header value, replacing all previous values.
    fn set(&mut self, name: HeaderName, value: Bytes) -> Result<(), LinkError>;
}

impl HeaderStore for HeaderMap {
    #[inline]
    fn get(&self, name: &HeaderName) -> Option<&[u8]> {
        HeaderMap::get(self, name).map(|value| value.as_bytes())
    }

    #[inline]
    fn set(&mut self, name: HeaderName, value: Bytes) -> Result<(), LinkError> {
        let value = HeaderValue::from_maybe_shared(value)?;
        self.insert(name, value);
        Ok(())
    }
}

impl<B> HeaderStore for http::Response<B> {
    #[inline]
    fn get(&self, name: &HeaderName) -> Option<&[u8]> {
        HeaderStore::get(self.headers(), name)
    }

    #[inline]
    fn set(&mut self, name: HeaderName, value: Bytes) -> Result<(), LinkError> {
        HeaderStore::set(self.headers_mut(), name, value)
    }
}

impl<B> HeaderStore for http::Request<B> {
    #[inline]
    fn get(&self, name: &HeaderName) -> Option<&[u8]> {
        HeaderStore::get(self.headers(), name)
    }

    #[inline]
    fn set(&mut self, name: HeaderName, value: Bytes) -> Result<(), LinkError> {
        HeaderStore::set(self.headers_mut(), name, value)
    }
}

///Appends link to `Link` header.
///
///If header already has value, link is separated from it by comma.
///
///```
///let mut headers = httplink::header::HeaderMap::new();
///
///httplink::append(&mut headers, "/things/2842", "next", httplink::Options::new()).expect("To append");
///httplink::append(&mut headers, "http://çrunchy/bacon", "contents", httplink::Options::new()).expect("To append");
///
///assert_eq!(headers.get(httplink::header::LINK).expect("To have Link"), "</things/2842>; rel=next, <http://%C3%A7runchy/bacon>; rel=contents");
///```
///
///# Errors
///
///- When `crossorigin` is neither `anonymous` nor `use-credentials`. Header is left untouched.
///- When resulting value cannot be used as header.
pub fn append<S: HeaderStore + ?Sized>(store: &mut S, target: &str, rel: &str, options: Options) -> Result<(), LinkError> {
    append_link_with::<DefaultCfg, S>(store, &Link::with_options(target, rel, options))
}

#[inline]
///Appends link to header using provided config.
pub fn append_with<C: Config, S: HeaderStore + ?Sized>(store: &mut S, target: &str, rel: &str, options: Options) -> Result<(), LinkError> {
    append_link_with::<C, S>(store, &Link::with_options(target, rel, options))
}

#[inline]
///Appends already built link to `Link` header.
pub fn append_link<S: HeaderStore + ?Sized>(store: &mut S, link: &Link) -> Result<(), LinkError> {
    append_link_with::<DefaultCfg, S>(store, link)
}

///Appends already built link to header using provided config.
pub fn append_link_with<C: Config, S: HeaderStore + ?Sized>(store: &mut S, link: &Link) -> Result<(), LinkError> {
    let display = link.display::<C>()?;
    let name = C::header_name();

    let mut buffer = BytesWriter::with_smol_capacity();
    let _ = match store.get(&name) {
        Some(existing) if !existing.is_empty() => {
            buffer.reserve(existing.len());
            let _ = buffer.write_all(existing);
            write!(&mut buffer, "{}{}", C::separator(), display)
        },
        _ => write!(&mut buffer, "{}", display),
    };

    let value = buffer.freeze();
    tracing::debug!(header = %name, len = value.len(), "Append link to {}", link.target);
    store.set(name, value)
}
