//! Marker link parsing.
//!
//! A marker link looks like `https://<zone>.<host>/#<x>,<y>` with anything
//! allowed after the coordinate pair. Zone and coordinates are extracted
//! independently: either may be absent while the other is present, and no
//! input makes the parser fail.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::zone::ZoneName;

/// Host suffix used by marker links unless configured otherwise.
pub const DEFAULT_LINK_HOST: &str = "yaga.host";

const SCHEME: &str = "https://";

/// Integer pixel position in image space (row 0 at the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

/// What could be extracted from one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedLink {
    pub zone: Option<ZoneName>,
    pub coords: Option<PixelCoord>,
}

/// Extracts zone identity and pixel coordinates from marker links.
#[derive(Debug, Clone)]
pub struct LinkParser {
    zone_suffix: String,
    coord_marker: String,
}

impl Default for LinkParser {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_HOST)
    }
}

impl LinkParser {
    /// Create a parser for links served from `host` (e.g. `yaga.host`).
    #[must_use]
    pub fn new(host: &str) -> Self {
        Self {
            zone_suffix: format!(".{host}"),
            coord_marker: format!("{host}/#"),
        }
    }

    #[must_use]
    pub fn parse(&self, link: &str) -> ParsedLink {
        ParsedLink {
            zone: self.zone(link),
            coords: self.coords(link),
        }
    }

    /// Zone between `https://` and `.<host>`, canonicalized.
    #[must_use]
    pub fn zone(&self, link: &str) -> Option<ZoneName> {
        link.match_indices(SCHEME).find_map(|(start, _)| {
            let rest = &link[start + SCHEME.len()..];
            let (raw, _) = rest.split_once(&self.zone_suffix)?;
            if raw.contains('/') {
                return None;
            }
            ZoneName::canonicalize(raw)
        })
    }

    /// First `<host>/#<x>,<y>` occurrence whose pair parses.
    #[must_use]
    pub fn coords(&self, link: &str) -> Option<PixelCoord> {
        link.match_indices(&self.coord_marker)
            .find_map(|(start, _)| coords_at(&link[start + self.coord_marker.len()..]))
    }
}

fn coords_at(fragment: &str) -> Option<PixelCoord> {
    let (x, rest) = leading_u32(fragment)?;
    let rest = rest.strip_prefix(',')?;
    let (y, _) = leading_u32(rest)?;
    Some(PixelCoord { x, y })
}

/// Parse the leading ASCII digits of `s`. Overflow counts as no match.
fn leading_u32(s: &str) -> Option<(u32, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn zone(name: &str) -> Option<ZoneName> {
        ZoneName::canonicalize(name)
    }

    #[rstest]
    #[case("https://xanadu.yaga.host/#10,20", "Xanadu", 10, 20)]
    #[case("https://HARMONY.yaga.host/#0,0", "Harmony", 0, 0)]
    #[case("https://exodus.yaga.host/#1536,2048&layer=1", "Exodus", 1536, 2048)]
    #[case("see https://celebration.yaga.host/#7,8 here", "Celebration", 7, 8)]
    fn parses_well_formed_links(
        #[case] link: &str,
        #[case] expected_zone: &str,
        #[case] x: u32,
        #[case] y: u32,
    ) {
        let parsed = LinkParser::default().parse(link);
        assert_eq!(parsed.zone, zone(expected_zone));
        assert_eq!(parsed.coords, Some(PixelCoord { x, y }));
    }

    #[test]
    fn custom_host_is_honored() {
        let parsed = LinkParser::new("host").parse("https://Xanadu.host/#10,20");
        assert_eq!(parsed.zone, zone("Xanadu"));
        assert_eq!(parsed.coords, Some(PixelCoord { x: 10, y: 20 }));
    }

    #[test]
    fn missing_fragment_keeps_zone() {
        let parsed = LinkParser::default().parse("https://pristine.yaga.host/");
        assert_eq!(parsed.zone, zone("Pristine"));
        assert_eq!(parsed.coords, None);
    }

    #[test]
    fn wrong_scheme_keeps_coordinates() {
        let parsed = LinkParser::default().parse("http://release.yaga.host/#3,4");
        assert_eq!(parsed.zone, None);
        assert_eq!(parsed.coords, Some(PixelCoord { x: 3, y: 4 }));
    }

    #[rstest]
    #[case("")]
    #[case("not a link")]
    #[case("https://melody.example.com/#1,2")]
    #[case("https://.yaga.host/#")]
    #[case("https://a/b.yaga.host/#x,y")]
    fn malformed_links_resolve_to_absent(#[case] link: &str) {
        let parsed = LinkParser::default().parse(link);
        assert_eq!(parsed.zone, None);
        assert_eq!(parsed.coords, None);
    }

    #[rstest]
    #[case("https://cadence.yaga.host/#12")]
    #[case("https://cadence.yaga.host/#12,")]
    #[case("https://cadence.yaga.host/#-1,5")]
    #[case("https://cadence.yaga.host/#1.5,5")]
    #[case("https://cadence.yaga.host/#99999999999,5")]
    fn partial_or_invalid_pairs_have_no_coordinates(#[case] link: &str) {
        let parsed = LinkParser::default().parse(link);
        assert_eq!(parsed.zone, zone("Cadence"));
        assert_eq!(parsed.coords, None);
    }

    #[test]
    fn later_coordinate_marker_is_tried() {
        let link = "https://melody.yaga.host/#bad https://melody.yaga.host/#5,6";
        assert_eq!(
            LinkParser::default().coords(link),
            Some(PixelCoord { x: 5, y: 6 })
        );
    }
}
