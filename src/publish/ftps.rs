//! FTPS-backed `RemoteSite` built on suppaftp.
//!
//! The control connection is upgraded to TLS right after connect and the data
//! channel runs protected (PROT P), so both command and bulk streams are
//! encrypted. Transfers use binary mode.

use std::io::Read;

use suppaftp::native_tls::TlsConnector;
use suppaftp::types::FileType;
use suppaftp::{FtpError, NativeTlsConnector, NativeTlsFtpStream, Status};
use tracing::{debug, info};

use super::remote::{RemoteError, RemoteSite};

/// One encrypted FTPS session.
pub struct FtpsSite {
    stream: NativeTlsFtpStream,
}

impl FtpsSite {
    /// Connect, upgrade to TLS, authenticate, and switch to binary transfers.
    pub fn connect(host: &str, port: u16, user: &str, password: &str) -> Result<Self, RemoteError> {
        let addr = format!("{host}:{port}");
        info!("Connecting to {addr}");

        let stream = NativeTlsFtpStream::connect(&addr)
            .map_err(|e| RemoteError::Session(format!("connect to {addr}: {e}")))?;

        let connector = TlsConnector::new()
            .map_err(|e| RemoteError::Session(format!("TLS setup: {e}")))?;
        let mut stream = stream
            .into_secure(NativeTlsConnector::from(connector), host)
            .map_err(|e| RemoteError::Session(format!("TLS upgrade for {host}: {e}")))?;

        stream
            .login(user, password)
            .map_err(|e| RemoteError::Session(format!("login as {user}: {e}")))?;
        stream
            .transfer_type(FileType::Binary)
            .map_err(|e| RemoteError::Session(format!("set binary mode: {e}")))?;

        debug!("Logged in and secured (control + data channel)");
        Ok(Self { stream })
    }

    /// The server answers 550 for both "directory exists" (MKD) and
    /// "no such file" (DELE), so the benign status maps to a different
    /// variant depending on which operation was attempted.
    fn classify(err: FtpError, path: &str, benign: fn(String) -> RemoteError) -> RemoteError {
        match &err {
            FtpError::UnexpectedResponse(response)
                if response.status == Status::FileUnavailable =>
            {
                benign(path.to_string())
            }
            _ => RemoteError::Session(format!("{path}: {err}")),
        }
    }
}

impl RemoteSite for FtpsSite {
    fn make_dir(&mut self, path: &str) -> Result<(), RemoteError> {
        self.stream
            .mkdir(path)
            .map_err(|e| Self::classify(e, path, RemoteError::AlreadyExists))
    }

    fn remove_file(&mut self, path: &str) -> Result<(), RemoteError> {
        self.stream
            .rm(path)
            .map_err(|e| Self::classify(e, path, RemoteError::NotFound))
    }

    fn store(&mut self, remote_path: &str, mut reader: &mut dyn Read) -> Result<u64, RemoteError> {
        self.stream
            .put_file(remote_path, &mut reader)
            .map_err(|e| RemoteError::Session(format!("store {remote_path}: {e}")))
    }

    fn quit(&mut self) -> Result<(), RemoteError> {
        self.stream
            .quit()
            .map_err(|e| RemoteError::Session(format!("quit: {e}")))
    }
}
