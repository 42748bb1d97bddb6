use core::fmt;
use core::fmt::Write;
use core::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::config::{Config, DefaultCfg};
use crate::utils::enc::Encoder;
use super::{CrossOrigin, LinkError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
///Optional attributes of link.
///
///Every attribute is omitted from link when absent or empty.
///Setting the same attribute twice overrides previous value.
pub struct Options {
    ///Human readable `title`, written as it is inside quotes.
    pub title: Option<String>,
    ///Extended `title*` as pair of language tag and value.
    ///
    ///Language tag may be empty, value is percent encoded when written.
    pub title_star: Option<(String, String)>,
    ///`anchor` URI reference, percent encoded when written.
    pub anchor: Option<String>,
    ///Language tags of target, each written as separate `hreflang`
    pub hreflang: Vec<String>,
    ///Media type hint, written as `type`
    pub type_hint: Option<String>,
    ///`crossorigin` mode.
    ///
    ///Kept as it is and validated when link is written,
    ///see [CrossOrigin](enum.CrossOrigin.html) for allowed values.
    pub cross_origin: Option<String>,
    ///Extension attributes written as `name=value` without quoting.
    pub extensions: Vec<(String, String)>,
}

impl Options {
    #[inline]
    ///Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    ///Sets `title`
    pub fn title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    ///Sets `title*` using language tag and value.
    pub fn title_star<L: Into<String>, T: Into<String>>(mut self, lang: L, title: T) -> Self {
        self.title_star = Some((lang.into(), title.into()));
        self
    }

    #[inline]
    ///Sets `anchor`
    pub fn anchor<T: Into<String>>(mut self, anchor: T) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    ///Sets language tags, replacing previous ones.
    pub fn hreflang<I: IntoIterator<Item = T>, T: Into<String>>(mut self, tags: I) -> Self {
        self.hreflang = tags.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    ///Sets `type` hint.
    pub fn type_hint<T: Into<String>>(mut self, type_hint: T) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    #[inline]
    ///Sets `type` hint out of media type.
    pub fn mime_type(self, mime: &mime::Mime) -> Self {
        self.type_hint(mime.as_ref())
    }

    #[inline]
    ///Sets `crossorigin` mode.
    ///
    ///Value is validated only when link is written.
    pub fn cross_origin<T: Into<String>>(mut self, mode: T) -> Self {
        self.cross_origin = Some(mode.into());
        self
    }

    #[inline]
    ///Adds extension attribute.
    pub fn extension<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.extensions.push((name.into(), value.into()));
        self
    }

    ///Sets extension attributes, replacing previous ones.
    pub fn extensions<I: IntoIterator<Item = (N, V)>, N: Into<String>, V: Into<String>>(mut self, extensions: I) -> Self {
        self.extensions = extensions.into_iter().map(|(name, value)| (name.into(), value.into())).collect();
        self
    }

    ///Returns parsed `crossorigin` mode, if it is set.
    ///
    ///Empty value is treated as absent.
    pub fn cross_origin_mode(&self) -> Result<Option<CrossOrigin>, LinkError> {
        match non_empty(&self.cross_origin) {
            Some(mode) => CrossOrigin::from_str(mode).map(Some),
            None => Ok(None),
        }
    }
}

#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_ref().map(|value| value.as_str()).filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
///Single value of `Link` header, defined in [RFC8288](https://tools.ietf.org/html/rfc8288#section-3).
///
///```
///let link = httplink::Link::new("/things/2842", "next");
///assert_eq!(link.format().expect("To format link"), "</things/2842>; rel=next");
///```
pub struct Link {
    ///Target URI reference.
    pub target: String,
    ///Relation type.
    ///
    ///When it contains `//` it is treated as one or more space separated URIs.
    pub rel: String,
    ///Optional attributes.
    pub options: Options,
}

impl Link {
    #[inline]
    ///Creates link without attributes.
    pub fn new<T: Into<String>, R: Into<String>>(target: T, rel: R) -> Self {
        Self::with_options(target, rel, Options::default())
    }

    #[inline]
    ///Creates link with attributes.
    pub fn with_options<T: Into<String>, R: Into<String>>(target: T, rel: R, options: Options) -> Self {
        Self {
            target: target.into(),
            rel: rel.into(),
            options,
        }
    }

    ///Validates link and returns its printable form, using provided config.
    pub fn display<C: Config>(&self) -> Result<LinkDisplay<'_>, LinkError> {
        let cross_origin = match self.options.cross_origin_mode() {
            Ok(mode) => mode,
            Err(error) => {
                tracing::warn!(uri = %self.target, rel = %self.rel, "Rejected link: {}", error);
                return Err(error);
            }
        };

        Ok(LinkDisplay {
            link: self,
            cross_origin,
            check_escaped: C::check_escaped(),
        })
    }

    #[inline]
    ///Formats link with default config.
    pub fn format(&self) -> Result<String, LinkError> {
        self.display::<DefaultCfg>().map(|display| display.to_string())
    }
}

///Validated link, ready to be written.
///
///Created by [Link::display](struct.Link.html#method.display)
pub struct LinkDisplay<'a> {
    link: &'a Link,
    cross_origin: Option<CrossOrigin>,
    check_escaped: bool,
}

impl<'a> LinkDisplay<'a> {
    fn write_rel(&self, f: &mut fmt::Formatter, encoder: &Encoder) -> fmt::Result {
        let rel = self.link.rel.as_str();

        if !rel.contains("//") {
            return f.write_str(rel);
        }

        f.write_char('"')?;
        for (idx, uri) in rel.split(' ').enumerate() {
            if idx > 0 {
                f.write_char(' ')?;
            }
            f.write_str(&encoder.encode(uri))?;
        }
        f.write_char('"')
    }
}

impl<'a> fmt::Display for LinkDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let uri_encoder = Encoder::new(false, self.check_escaped);
        let value_encoder = Encoder::new(true, self.check_escaped);
        let options = &self.link.options;

        write!(f, "<{}>; rel=", uri_encoder.encode(&self.link.target))?;
        self.write_rel(f, &uri_encoder)?;

        if let Some(title) = non_empty(&options.title) {
            write!(f, "; title=\"{}\"", title)?;
        }

        if let Some((lang, title)) = options.title_star.as_ref() {
            write!(f, "; title*=UTF-8'{}'{}", lang, value_encoder.encode(title))?;
        }

        if let Some(type_hint) = non_empty(&options.type_hint) {
            write!(f, "; type=\"{}\"", type_hint)?;
        }

        for lang in options.hreflang.iter() {
            write!(f, "; hreflang={}", lang)?;
        }

        if let Some(anchor) = non_empty(&options.anchor) {
            write!(f, "; anchor=\"{}\"", uri_encoder.encode(anchor))?;
        }

        match self.cross_origin {
            Some(CrossOrigin::Anonymous) => f.write_str("; crossorigin")?,
            Some(CrossOrigin::UseCredentials) => f.write_str("; crossorigin=\"use-credentials\"")?,
            None => (),
        }

        for (name, value) in options.extensions.iter() {
            write!(f, "; {}={}", name, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Link, Options, LinkError};

    #[test]
    fn format_bare_link() {
        let link = Link::new("/things/2842", "next");
        assert_eq!(link.format().expect("To format"), "</things/2842>; rel=next");
    }

    #[test]
    fn format_rel_uri() {
        let link = Link::new("abç", "http://example.com/çrunchy");
        assert_eq!(link.format().expect("To format"), "<ab%C3%A7>; rel=\"http://example.com/%C3%A7runchy\"");

        let link = Link::new("/alt-thing", "alternate http://example.com/çrunchy");
        assert_eq!(link.format().expect("To format"), "</alt-thing>; rel=\"alternate http://example.com/%C3%A7runchy\"");
    }

    #[test]
    fn format_rel_without_uri_as_is() {
        let link = Link::new("/a", "çrunchy thing");
        assert_eq!(link.format().expect("To format"), "</a>; rel=çrunchy thing");
    }

    #[test]
    fn format_in_fixed_order() {
        let options = Options::new().extension("sizes", "72x72")
                                    .cross_origin("anonymous")
                                    .anchor("#top")
                                    .hreflang(vec!["en-GB", "de"])
                                    .type_hint("text/html")
                                    .title_star("en", "A çrunchy thing")
                                    .title("A related thing");
        let link = Link::with_options("/related/thing", "alternate", options);

        let expected = "</related/thing>; rel=alternate; title=\"A related thing\"; \
                        title*=UTF-8'en'A%20%C3%A7runchy%20thing; type=\"text/html\"; \
                        hreflang=en-GB; hreflang=de; anchor=\"#top\"; crossorigin; sizes=72x72";
        assert_eq!(link.format().expect("To format"), expected);
    }

    #[test]
    fn skip_empty_attributes() {
        let options = Options::new().title("").type_hint("").anchor("").cross_origin("");
        let link = Link::with_options("/x", "alt", options);
        assert_eq!(link.format().expect("To format"), "</x>; rel=alt");
    }

    #[test]
    fn title_star_with_empty_values() {
        let link = Link::with_options("/x", "alt", Options::new().title_star("", ""));
        assert_eq!(link.format().expect("To format"), "</x>; rel=alt; title*=UTF-8''");
    }

    #[test]
    fn last_setter_wins() {
        let options = Options::new().title("first")
                                    .title("second")
                                    .hreflang(vec!["en"])
                                    .hreflang(vec!["de"])
                                    .extensions(vec![("a", "1")])
                                    .extensions(vec![("b", "2")]);
        let link = Link::with_options("/x", "alt", options);
        assert_eq!(link.format().expect("To format"), "</x>; rel=alt; title=\"second\"; hreflang=de; b=2");
    }

    #[test]
    fn mime_type_hint() {
        let options = Options::new().mime_type(&mime::APPLICATION_JSON);
        let link = Link::with_options("/x", "alternate", options);
        assert_eq!(link.format().expect("To format"), "</x>; rel=alternate; type=\"application/json\"");
    }

    #[test]
    fn reject_invalid_cross_origin() {
        let link = Link::with_options("/x", "alt", Options::new().cross_origin("deny"));
        match link.format() {
            Err(LinkError::InvalidCrossOrigin(value)) => assert_eq!(value, "deny"),
            result => panic!("Unexpected result: {:?}", result),
        }
    }
}
