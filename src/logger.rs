use {
    log::{Level, LevelFilter, Log, Metadata, Record},
    parking_lot::Mutex,
    std::{
        io::Write,
        sync::{
            atomic::{AtomicUsize, Ordering::Relaxed},
            Arc,
        },
        time::SystemTime,
    },
};


pub struct Logger {
    level: AtomicUsize,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    pub fn new(level: Level, sink: Box<dyn Write + Send>) -> Arc<Self> {
        Arc::new(Self {
            level: AtomicUsize::new(level as usize),
            sink: Mutex::new(sink),
        })
    }

    /// Installs a logger writing to stderr as the global logger.
    ///
    /// Returns `None` if a global logger has already been installed.
    pub fn install_stderr(level: Level) -> Option<Arc<Self>> {
        let slf = Self::new(level, Box::new(std::io::stderr()));
        let res = log::set_boxed_logger(Box::new(LogWrapper {
            logger: slf.clone(),
        }));
        if res.is_err() {
            return None;
        }
        log::set_max_level(level.to_level_filter());
        Some(slf)
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as usize, Relaxed);
        log::set_max_level(level.to_level_filter());
    }

    pub fn level(&self) -> LevelFilter {
        match self.level.load(Relaxed) {
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn write(&self, record: &Record) {
        let now = humantime::format_rfc3339_millis(SystemTime::now());
        let mut sink = self.sink.lock();
        let _ = match record.module_path() {
            Some(mp) => writeln!(
                sink,
                "[{} {:5} {}] {}",
                now,
                record.level(),
                mp,
                record.args(),
            ),
            _ => writeln!(sink, "[{} {:5}] {}", now, record.level(), record.args()),
        };
    }
}

struct LogWrapper {
    logger: Arc<Logger>,
}

impl Log for LogWrapper {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() as usize <= self.logger.level.load(Relaxed)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.logger.write(record);
    }

    fn flush(&self) {
        let _ = self.logger.sink.lock().flush();
    }
}
