//! Single file downloading.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::fs::{output_path, resolve_filename};
use crate::http::HttpClient;
use crate::output::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Content types accepted for downloads. Anything else is most likely an
/// HTML error page.
const ACCEPTED_CONTENT_TYPE: &str = "application/";

/// A file written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Download the resource behind `link` into `output_dir`.
///
/// The response is validated before any file is created. An existing file of
/// the same name is overwritten.
pub async fn download_file(
    client: &HttpClient,
    output_dir: &Path,
    link: &str,
    show_progress: bool,
) -> Result<DownloadedFile> {
    if link.trim().is_empty() {
        return Err(Error::MissingLink);
    }

    let response = client
        .get(link)
        .await
        .map_err(|e| Error::Download(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::BadStatus(status));
    }

    let content_type = header_lossy(&response, CONTENT_TYPE).unwrap_or_default();
    if !content_type.contains(ACCEPTED_CONTENT_TYPE) {
        return Err(Error::UnexpectedContentType(content_type.into_owned()));
    }

    let disposition = header_lossy(&response, CONTENT_DISPOSITION);
    let filename = resolve_filename(disposition.as_deref(), response.url())?;
    let path = output_path(output_dir, &filename);

    let bytes = stream_to_file(response, &path, show_progress).await?;

    Ok(DownloadedFile {
        filename,
        path,
        bytes,
    })
}

/// Header value as text. Non-ASCII bytes (UTF-8 filenames) are decoded lossily.
fn header_lossy(response: &Response, name: HeaderName) -> Option<Cow<'_, str>> {
    response
        .headers()
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
}

/// Stream a response body into a freshly created file.
///
/// A failure part way through leaves the partial file on disk.
async fn stream_to_file(response: Response, path: &Path, show_progress: bool) -> Result<u64> {
    let content_length = response.content_length();
    let progress = if show_progress && content_length.is_some_and(|l| l > PROGRESS_THRESHOLD) {
        Some(create_download_bar(content_length.unwrap_or(0)))
    } else {
        None
    };

    let mut file = File::create(path)
        .await
        .map_err(|e| Error::Write(format!("error creating file: {}", e)))?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Write(format!("stream error: {}", e)))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::Write(e.to_string()))?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush()
        .await
        .map_err(|e| Error::Write(e.to_string()))?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(downloaded)
}
