//! Single-stream HTTP GET straight into a `.part` file.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::Path;

use super::{DownloadError, TransferObserver};
use crate::http::{HttpClient, ResponseHeaders};
use crate::storage::PartFile;

/// Downloads `url` into `destination`, streaming each received chunk to disk.
///
/// The observer learns the total (when `Content-Length` is present) before the
/// first chunk, then every chunk size, then the final path. On any failure the
/// temp file is removed and an existing `destination` is left as it was.
pub fn download(
    http: &HttpClient,
    url: &str,
    custom_headers: &HashMap<String, String>,
    destination: &Path,
    observer: &mut dyn TransferObserver,
) -> Result<u64, DownloadError> {
    let mut part = PartFile::create(destination)?;
    match stream_into(http, url, custom_headers, &mut part, observer) {
        Ok(()) => {
            let written = part.written();
            let path = part.finalize()?;
            observer.on_complete(&path, written);
            Ok(written)
        }
        Err(e) => {
            part.discard();
            Err(e)
        }
    }
}

fn stream_into(
    http: &HttpClient,
    url: &str,
    custom_headers: &HashMap<String, String>,
    part: &mut PartFile,
    observer: &mut dyn TransferObserver,
) -> Result<(), DownloadError> {
    let headers = RefCell::new(ResponseHeaders::default());
    let storage_error: RefCell<Option<io::Error>> = RefCell::new(None);
    let mut announced = false;

    let mut easy = http.easy(url, custom_headers)?;
    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            headers.borrow_mut().push_raw(data);
            true
        })?;
        transfer.write_function(|data| {
            // Error bodies never reach the file.
            if let Some(code) = headers.borrow().status() {
                if !(200..300).contains(&code) {
                    return Ok(0);
                }
            }
            if !announced {
                announced = true;
                observer.on_length(headers.borrow().content_length());
            }
            match part.append(data) {
                Ok(()) => {
                    observer.on_chunk(data.len() as u64);
                    Ok(data.len())
                }
                Err(e) => {
                    *storage_error.borrow_mut() = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        let perform_result = transfer.perform();
        if let Err(e) = perform_result {
            if let Some(io_err) = storage_error.borrow_mut().take() {
                return Err(DownloadError::Storage(io_err));
            }
            if let Some(code) = headers.borrow().status() {
                if !(200..300).contains(&code) {
                    return Err(DownloadError::Http(code));
                }
            }
            return Err(DownloadError::Transport(e));
        }
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(DownloadError::Http(code));
    }

    let expected = headers.borrow().content_length();
    if !announced {
        // Empty body: the write callback never ran.
        observer.on_length(expected);
    }
    if let Some(expected) = expected {
        let received = part.written();
        if received != expected {
            return Err(DownloadError::PartialTransfer { expected, received });
        }
    }
    Ok(())
}
