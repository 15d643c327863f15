//! Resume text extraction from uploaded PDFs.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts the text of every page, concatenated in page order.
///
/// Runs the parser on the blocking pool. Parse failures and parser panics are
/// both reported as `UnprocessableEntity`.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let size = data.len();
    let text = tokio::task::spawn_blocking(move || extract_pages(&data))
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("PDF parser crashed: {e}")))??;

    debug!("Extracted {} chars from {} byte PDF", text.len(), size);
    Ok(text)
}

fn extract_pages(data: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;
    Ok(pages.concat())
}

#[cfg(test)]
pub(crate) mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use super::*;

    /// Builds an in-memory PDF with one Helvetica text line per page.
    pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_pages_are_joined_in_order() {
        let pdf = pdf_with_pages(&["FIRSTPAGE", "SECONDPAGE"]);
        let text = extract_pdf_text(Bytes::from(pdf)).await.unwrap();
        let first = text.find("FIRSTPAGE").expect("page 1 text missing");
        let second = text.find("SECONDPAGE").expect("page 2 text missing");
        assert!(first < second, "pages out of order: {text:?}");
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_unprocessable() {
        let err = extract_pdf_text(Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_empty_upload_is_unprocessable() {
        let err = extract_pdf_text(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
