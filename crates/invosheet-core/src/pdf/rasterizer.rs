//! Embedded-image rasterizer built on lopdf.
//!
//! Scanned invoice PDFs carry each page as a single full-page image XObject;
//! pulling that image out is equivalent to rendering the page and avoids a
//! native renderer dependency.

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, Luma, Rgb};
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, trace, warn};

use super::{PageImage, PageRasterizer, Result};
use crate::error::PdfError;

/// Rasterizes PDF pages by extracting their embedded scan images.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedImageRasterizer {
    /// Maximum pages to rasterize per document (0 = unlimited).
    max_pages: usize,
}

impl EmbeddedImageRasterizer {
    pub fn new() -> Self {
        Self { max_pages: 0 }
    }

    /// Cap the number of pages taken from each document.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    fn load(&self, pdf: &Path) -> Result<Document> {
        let data = fs::read(pdf).map_err(|e| PdfError::Parse(e.to_string()))?;
        let mut doc = Document::load_mem(&data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty-password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted {} with empty password", pdf.display());
        }

        if doc.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }
        Ok(doc)
    }

    /// Largest image XObject reachable from the page's resources.
    fn page_scan(&self, doc: &Document, page_id: ObjectId) -> Option<DynamicImage> {
        let resources = self.page_resources(doc, page_id)?;
        let xobjects = resources.get(b"XObject").ok()?;
        let (_, xobjects) = doc.dereference(xobjects).ok()?;
        let Object::Dictionary(xobj_dict) = xobjects else {
            return None;
        };

        let mut best: Option<DynamicImage> = None;
        for (_name, obj_ref) in xobj_dict.iter() {
            if let Ok((_, obj)) = doc.dereference(obj_ref) {
                if let Some(img) = image_from_object(doc, obj) {
                    let larger = best.as_ref().is_none_or(|b| {
                        u64::from(img.width()) * u64::from(img.height())
                            > u64::from(b.width()) * u64::from(b.height())
                    });
                    if larger {
                        best = Some(img);
                    }
                }
            }
        }
        best
    }

    /// Fallback: index into every image stream in the document, in object
    /// order. Some producers attach page scans without a per-page XObject
    /// entry.
    fn document_scan(&self, doc: &Document, page: u32) -> Option<DynamicImage> {
        let mut images = Vec::new();
        for (_id, object) in doc.objects.iter() {
            if let Some(img) = image_from_object(doc, object) {
                images.push(img);
            }
        }
        let idx = page.saturating_sub(1) as usize;
        images.into_iter().nth(idx)
    }

    /// Resources dictionary for a page, following Parent inheritance.
    fn page_resources(&self, doc: &Document, node_id: ObjectId) -> Option<Dictionary> {
        let node = doc.get_object(node_id).ok()?;
        let Object::Dictionary(dict) = node else {
            return None;
        };

        if let Ok(resources) = dict.get(b"Resources") {
            if let Ok((_, Object::Dictionary(res_dict))) = doc.dereference(resources) {
                return Some(res_dict.clone());
            }
        }

        if let Ok(Object::Reference(parent_id)) = dict.get(b"Parent") {
            return self.page_resources(doc, *parent_id);
        }
        None
    }
}

impl Default for EmbeddedImageRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRasterizer for EmbeddedImageRasterizer {
    fn rasterize(&self, pdf: &Path) -> Result<Vec<PageImage>> {
        let doc = self.load(pdf)?;
        let pages = doc.get_pages();
        let mut result = Vec::with_capacity(pages.len());

        for (&number, &page_id) in &pages {
            if self.max_pages > 0 && result.len() >= self.max_pages {
                warn!(
                    "{}: stopping after {} page(s)",
                    pdf.display(),
                    self.max_pages
                );
                break;
            }

            let image = self
                .page_scan(&doc, page_id)
                .or_else(|| self.document_scan(&doc, number))
                .ok_or(PdfError::NoPageImage(number))?;

            result.push(PageImage {
                source: pdf.to_path_buf(),
                page: number,
                image,
            });
        }

        debug!("rasterized {} page(s) from {}", result.len(), pdf.display());
        Ok(result)
    }
}

fn image_from_object(doc: &Document, obj: &Object) -> Option<DynamicImage> {
    let Object::Stream(stream) = obj else {
        return None;
    };
    let dict = &stream.dict;

    let subtype = dict.get(b"Subtype").ok()?;
    if subtype.as_name().ok()? != b"Image" {
        return None;
    }

    let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
    let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;
    trace!("image XObject {}x{}", width, height);

    if let Ok(filter) = dict.get(b"Filter") {
        let filter_name = match filter {
            Object::Name(name) => Some(name.as_slice()),
            Object::Array(arr) if !arr.is_empty() => arr.first().and_then(|o| o.as_name().ok()),
            _ => None,
        };

        match filter_name {
            Some(b"DCTDecode") => {
                // JPEG scan, stream content is the compressed file
                return image::load_from_memory_with_format(
                    &stream.content,
                    image::ImageFormat::Jpeg,
                )
                .ok();
            }
            Some(b"JPXDecode") | Some(b"CCITTFaxDecode") | Some(b"JBIG2Decode") => {
                trace!("unsupported image filter");
                return None;
            }
            _ => {}
        }
    }

    let data = match stream.decompressed_content() {
        Ok(d) => d,
        Err(_) => stream.content.clone(),
    };

    let color_space = dict
        .get(b"ColorSpace")
        .ok()
        .and_then(|o| match o {
            Object::Name(name) => Some(name.as_slice()),
            Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
            Object::Reference(r) => doc.get_object(*r).ok().and_then(|o| o.as_name().ok()),
            _ => None,
        })
        .unwrap_or(b"DeviceRGB");

    let bits = dict
        .get(b"BitsPerComponent")
        .ok()
        .and_then(|o| o.as_i64().ok())
        .unwrap_or(8) as u8;

    raw_image(&data, width, height, color_space, bits)
}

fn raw_image(
    data: &[u8],
    width: u32,
    height: u32,
    color_space: &[u8],
    bits: u8,
) -> Option<DynamicImage> {
    if bits != 8 {
        trace!("unsupported bits per component: {}", bits);
        return None;
    }

    let rgb_len = (width as usize) * (height as usize) * 3;
    let gray_len = (width as usize) * (height as usize);

    if (color_space == b"DeviceRGB" || color_space == b"RGB") && data.len() >= rgb_len {
        return ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, data[..rgb_len].to_vec())
            .map(DynamicImage::ImageRgb8);
    }
    if (color_space == b"DeviceGray" || color_space == b"G") && data.len() >= gray_len {
        return ImageBuffer::<Luma<u8>, _>::from_raw(width, height, data[..gray_len].to_vec())
            .map(DynamicImage::ImageLuma8);
    }

    trace!("could not decode raw image data ({} bytes)", data.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_file_is_a_parse_error() {
        let err = EmbeddedImageRasterizer::new()
            .rasterize(Path::new("/nonexistent/invoice.pdf"))
            .unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn raw_rgb_data_decodes() {
        let data = vec![255u8; 2 * 2 * 3];
        let img = raw_image(&data, 2, 2, b"DeviceRGB", 8).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
    }

    #[test]
    fn raw_gray_data_decodes() {
        let data = vec![128u8; 4];
        let img = raw_image(&data, 2, 2, b"DeviceGray", 8).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
    }

    #[test]
    fn truncated_raw_data_is_rejected() {
        assert!(raw_image(&[0u8; 3], 2, 2, b"DeviceRGB", 8).is_none());
        assert!(raw_image(&[0u8; 12], 2, 2, b"DeviceRGB", 1).is_none());
    }
}
