use crate::{
    application::classify_image::{dto::ClassificationReport, use_case::ClassifyImageUseCase},
    domain::classification::upload::UploadedImage,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, State},
};

/// Accept a multipart upload and run one classification round-trip.
///
/// The image travels in a part named `file`; filename and MIME type are
/// forwarded unvalidated, the remote API being the authority on
/// acceptable formats. Other parts are ignored.
pub async fn classify_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ClassificationReport>, AppError> {
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Field error".into()))?
    {
        if field.name().unwrap_or("") == "file" {
            let filename = field
                .file_name()
                .unwrap_or("upload")
                .to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|_| AppError::BadRequest("Byte error".into()))?;
            image = Some(UploadedImage::new(filename, content_type, data));
        }
    }

    let image = image.ok_or(AppError::BadRequest("Missing file".into()))?;

    let use_case = ClassifyImageUseCase::new(state.classifier.clone());
    let report = use_case.execute(image).await?;
    Ok(Json(report))
}
