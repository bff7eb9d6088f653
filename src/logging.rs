use chrono::{format::DelayedFormat, DateTime, Local};
use crossbeam_channel::{unbounded, Sender};
use once_cell::sync::Lazy;
use std::{
    fmt::Write as _,
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
};

const LOG_DIR: &str = "log";

/// 單筆批次寫入的上限
const BATCH_SIZE: usize = 4096;

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("default"));

/// 非同步的檔案 log，訊息經由 channel 交給背景線程寫入 `log/{name}_{date}.log`。
pub struct Logger {
    writer: Option<Sender<LogMessage>>,
}

impl Logger {
    pub(crate) fn new(log_name: &str) -> Self {
        let log_path = match Self::get_log_path(log_name) {
            Some(path) => path,
            None => {
                error_console(format!("Failed to create log directory for {}", log_name));
                return Logger { writer: None };
            }
        };
        let (tx, rx) = unbounded::<LogMessage>();

        // 寫入檔案的操作使用另一個線程處理
        thread::spawn(move || {
            let file = match OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
            {
                Ok(file) => file,
                Err(why) => {
                    error_console(format!(
                        "Failed to open log file {} because {:?}",
                        log_path.display(),
                        why
                    ));
                    return;
                }
            };

            let mut writer = BufWriter::new(file);
            let mut line = String::with_capacity(BATCH_SIZE);

            while let Ok(received) = rx.recv() {
                if writeln!(
                    &mut line,
                    "{} {} {}",
                    received.created_at.format("%F %X%.6f"),
                    received.level,
                    received.msg
                )
                .is_err()
                {
                    continue;
                }

                if rx.is_empty() || line.len() >= BATCH_SIZE {
                    if writer.write_all(line.as_bytes()).is_err() {
                        info_console(line.clone())
                    }

                    if writer.flush().is_err() {
                        info_console(line.clone())
                    }

                    line.clear();
                }
            }
        });

        Logger { writer: Some(tx) }
    }

    pub(crate) fn info(&self, log: String) {
        self.send(log::Level::Info, log);
    }

    pub(crate) fn warn(&self, log: String) {
        self.send(log::Level::Warn, log);
    }

    pub(crate) fn error(&self, log: String) {
        self.send(log::Level::Error, log);
    }

    pub(crate) fn debug(&self, log: String) {
        self.send(log::Level::Debug, log);
    }

    fn send(&self, level: log::Level, msg: String) {
        match &self.writer {
            Some(writer) => {
                if let Err(why) = writer.send(LogMessage::new(level, msg)) {
                    error_console(why.to_string());
                }
            }
            // 沒有可寫的檔案時退回 console
            None => match level {
                log::Level::Error | log::Level::Warn => error_console(msg),
                _ => info_console(msg),
            },
        }
    }

    fn get_log_path(name: &str) -> Option<PathBuf> {
        let path = Path::new(LOG_DIR);

        if !path.exists() {
            fs::create_dir_all(path).ok()?;
        }

        let mut log_path = PathBuf::from(path);
        log_path.push(format!("{}_{}.log", name, Local::now().format("%Y-%m-%d")));

        Some(log_path)
    }
}

pub struct LogMessage {
    pub level: log::Level,
    pub msg: String,
    pub created_at: DateTime<Local>,
}

impl LogMessage {
    pub fn new(level: log::Level, msg: String) -> Self {
        LogMessage {
            level,
            msg,
            created_at: Local::now(),
        }
    }
}

pub fn info_file_async<S: Into<String>>(log: S) {
    LOGGER.info(log.into());
}

pub fn warn_file_async<S: Into<String>>(log: S) {
    LOGGER.warn(log.into());
}

pub fn error_file_async<S: Into<String>>(log: S) {
    LOGGER.error(log.into());
}

pub fn debug_file_async<S: Into<String>>(log: S) {
    LOGGER.debug(log.into());
}

pub fn info_console(log: String) {
    println!(
        "{} Info {}",
        Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
        log
    );
}

pub fn error_console(log: String) {
    eprintln!(
        "{} Error {}",
        DelayedFormat::to_string(&Local::now().format("%Y-%m-%d %H:%M:%S.%3f")),
        log
    );
}
