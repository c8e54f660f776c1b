//! Standalone Leaflet page for one scene.
//!
//! The page uses `CRS.Simple`, so scene coordinates are used as-is: the
//! background spans `imageBounds` and every marker sits at `[mapY, mapX]`.
//! Labels are inserted with `textContent`, never as markup.

use yaga_core::{Scene, ZoneName};

const LEAFLET_VERSION: &str = "1.9.4";

/// Render the HTML page for `scene` over the image at `image_url`.
///
/// # Errors
///
/// Returns an error if the scene cannot be serialized.
pub fn render_page(zone: &ZoneName, scene: &Scene, image_url: &str) -> serde_json::Result<String> {
    let scene_json = script_safe(&serde_json::to_string(scene)?);
    let image_json = script_safe(&serde_json::to_string(image_url)?);
    let title = escape_html(zone.as_str());

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title} map</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>
<style>
  html, body, #map {{ width: 100%; height: 100%; margin: 0; background: #000; }}
  .landmark {{ color: gold; font-size: 22px; line-height: 24px; text-align: center; text-shadow: 0 0 3px #000; }}
</style>
</head>
<body>
<div id="map"></div>
<script>
const scene = {scene_json};
const imageUrl = {image_json};
const map = L.map("map", {{ crs: L.CRS.Simple, minZoom: -5, zoomSnap: 0.25 }});
L.imageOverlay(imageUrl, scene.imageBounds, {{ interactive: true, opacity: 1.0 }}).addTo(map);
map.fitBounds(scene.imageBounds);
for (const marker of scene.markers) {{
  const at = [marker.mapY, marker.mapX];
  const layer = marker.kind === "star"
    ? L.marker(at, {{ icon: L.divIcon({{ className: "landmark", html: "★", iconSize: [24, 24] }}) }})
    : L.circleMarker(at, {{ radius: 8, color: "white", fill: true, fillOpacity: 0.5 }});
  const label = document.createElement("span");
  label.textContent = marker.label;
  layer.bindPopup(label).addTo(map);
}}
</script>
</body>
</html>
"#
    ))
}

/// Keep embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use yaga_core::{MarkerKind, PlacedMarker};

    use super::*;

    fn scene(label: &str) -> Scene {
        Scene {
            image_bounds: [[0.0, 0.0], [200.0, 300.0]],
            markers: vec![PlacedMarker {
                map_y: 180.0,
                map_x: 10.0,
                kind: MarkerKind::Star,
                label: label.to_string(),
            }],
        }
    }

    fn zone() -> ZoneName {
        ZoneName::canonicalize("xanadu").expect("zone")
    }

    #[test]
    fn embeds_scene_and_image() {
        let page = render_page(&zone(), &scene("Crate"), "file:///maps/xanadu.png").expect("page");

        assert!(page.contains("<title>Xanadu map</title>"));
        assert!(page.contains(r#""imageBounds":[[0.0,0.0],[200.0,300.0]]"#));
        assert!(page.contains(r#""mapY":180.0"#));
        assert!(page.contains(r#""kind":"star""#));
        assert!(page.contains(r#"const imageUrl = "file:///maps/xanadu.png";"#));
        assert!(page.contains("radius: 8"));
    }

    #[test]
    fn label_cannot_close_the_script() {
        let page = render_page(&zone(), &scene("</script><b>x</b>"), "x.png").expect("page");

        assert_eq!(page.matches("</script>").count(), 2);
        assert!(page.contains(r"<\/script><b>x<\/b>"));
    }

    #[test]
    fn escapes_markup_in_text() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
