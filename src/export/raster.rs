//! Raster conversion: SVG markup to PNG/JPG pixels.
//!
//! Renders through usvg + resvg onto an offscreen tiny-skia surface of
//! exactly the requested dimensions. The markup is stretched to fill the
//! surface - no aspect-ratio letterboxing. JPG has no alpha channel, so
//! its surface is filled opaque white before drawing; PNG stays
//! transparent.

use tiny_skia::{Color, Pixmap, Transform};

use super::{ExportError, ExportFormat, ExportRequest};

/// Render markup onto a fresh surface and encode it.
pub fn rasterize(markup: &str, request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
    // SVG format = no conversion needed
    if request.format == ExportFormat::Svg {
        return Ok(markup.as_bytes().to_vec());
    }

    let mut pixmap = Pixmap::new(request.width, request.height).ok_or(
        ExportError::DrawSurfaceUnavailable(request.width, request.height),
    )?;

    if request.format == ExportFormat::Jpg {
        pixmap.fill(Color::WHITE);
    }

    let tree = usvg::Tree::from_data(markup.as_bytes(), &usvg::Options::default())
        .map_err(|e| ExportError::ImageDecode(e.to_string()))?;

    // Stretch to fill exactly width x height
    let size = tree.size();
    let scale_x = request.width as f32 / size.width();
    let scale_y = request.height as f32 / size.height();
    resvg::render(
        &tree,
        Transform::from_scale(scale_x, scale_y),
        &mut pixmap.as_mut(),
    );

    match request.format {
        ExportFormat::Jpg => encode_jpeg(&pixmap, request.jpeg_quality),
        _ => pixmap
            .encode_png()
            .map_err(|e| ExportError::Encode("png", e.to_string())),
    }
}

/// Encode the surface as JPEG. The surface is fully opaque (white-filled
/// before drawing), so demultiplying is a straight channel copy.
fn encode_jpeg(pixmap: &Pixmap, quality: u8) -> Result<Vec<u8>, ExportError> {
    let mut rgb = Vec::with_capacity(pixmap.pixels().len() * 3);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgb.extend_from_slice(&[color.red(), color.green(), color.blue()]);
    }

    let mut payload = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut payload, quality)
        .encode(
            &rgb,
            pixmap.width(),
            pixmap.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ExportError::Encode("jpg", e.to_string()))?;
    Ok(payload)
}
