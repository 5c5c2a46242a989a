/// Источник текущего времени
pub trait Clock {
    /// Секунды от начала эпохи
    fn now( &self ) -> i64;
}

/// Системные часы
#[derive(Debug,Clone,Copy,Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now( &self ) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Часы, всегда показывающие одно и то же время
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now( &self ) -> i64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now( &self ) -> i64 {
        (**self).now()
    }
}
