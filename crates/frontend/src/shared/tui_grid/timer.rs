use gloo_timers::callback::Timeout;

/// Отменяемый отложенный вызов, через который адаптер повторяет
/// создание грида, пока библиотека не загрузилась
pub trait RetryTimer: 'static {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout` браузера через gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl RetryTimer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Timeout) {
        // Drop у Timeout вызывает clearTimeout
        drop(handle);
    }
}
