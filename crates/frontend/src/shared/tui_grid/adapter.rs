//! Адаптер жизненного цикла: ровно один экземпляр грида на одно монтирование.
//!
//! ```text
//!   mount ──► Idle ──(библиотека загружена)──► Mounted ──unmount──► Unmounted
//!               │                                 ▲
//!               └──(не загружена)──► Pending ─────┘  (повтор каждые N мс)
//! ```
//!
//! Повтор неограничен: пока библиотека не загрузилась, контейнер просто
//! пустой. `unmount` отменяет таймер и уничтожает экземпляр; он же
//! вызывается из `Drop`, так что ни таймер, ни экземпляр не переживают адаптер.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::grid::{ColumnInfo, GridOptions};
use serde_json::Value;

use super::event::GridEvent;
use super::library::{GridInstance, GridLibrary};
use super::timer::RetryTimer;

/// Интервал повторной попытки создать грид
pub const DEFAULT_RETRY_INTERVAL_MS: u32 = 100;

pub type ClickHandler<I> = Rc<dyn Fn(&GridEvent, &I)>;
pub type ReadyHandler<I> = Box<dyn FnOnce(&I)>;

/// Всё, что нужно для создания экземпляра
pub struct MountRequest<L: GridLibrary> {
    pub container: L::Container,
    pub rows: Vec<Value>,
    pub columns: Vec<ColumnInfo>,
    pub options: GridOptions,
    pub on_click: Option<ClickHandler<L::Instance>>,
    pub on_ready: Option<ReadyHandler<L::Instance>>,
}

impl<L: GridLibrary> MountRequest<L> {
    pub fn new(container: L::Container, rows: Vec<Value>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            container,
            rows,
            columns,
            options: GridOptions::default(),
            on_click: None,
            on_ready: None,
        }
    }

    pub fn options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&GridEvent, &L::Instance) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn on_ready(mut self, handler: impl FnOnce(&L::Instance) + 'static) -> Self {
        self.on_ready = Some(Box::new(handler));
        self
    }
}

/// Наблюдаемое состояние адаптера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridState {
    Idle,
    Pending,
    Mounted,
    /// Конструктор грида выбросил исключение; повторов не будет
    Failed,
    Unmounted,
}

enum Slot<I, H> {
    Idle,
    Pending(H),
    Mounted(I),
    Failed,
    Unmounted,
}

struct Inner<L: GridLibrary, T: RetryTimer> {
    library: L,
    timer: T,
    retry_interval_ms: u32,
    attempts: u32,
    slot: Slot<L::Instance, T::Handle>,
    request: Option<MountRequest<L>>,
}

pub struct GridAdapter<L: GridLibrary, T: RetryTimer> {
    inner: Rc<RefCell<Inner<L, T>>>,
}

impl<L: GridLibrary, T: RetryTimer> GridAdapter<L, T> {
    pub fn new(library: L, timer: T, retry_interval_ms: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                library,
                timer,
                retry_interval_ms,
                attempts: 0,
                slot: Slot::Idle,
                request: None,
            })),
        }
    }

    pub fn state(&self) -> GridState {
        match self.inner.borrow().slot {
            Slot::Idle => GridState::Idle,
            Slot::Pending(_) => GridState::Pending,
            Slot::Mounted(_) => GridState::Mounted,
            Slot::Failed => GridState::Failed,
            Slot::Unmounted => GridState::Unmounted,
        }
    }

    pub fn instance(&self) -> Option<L::Instance> {
        match &self.inner.borrow().slot {
            Slot::Mounted(instance) => Some(instance.clone()),
            _ => None,
        }
    }

    /// Создаёт экземпляр сразу или ставит повтор, если библиотека ещё не загружена.
    /// Повторный `mount` игнорируется.
    pub fn mount(&self, request: MountRequest<L>) {
        {
            let mut guard = self.inner.borrow_mut();
            if !matches!(guard.slot, Slot::Idle) {
                log::warn!("tui_grid: mount ignored, adapter is not idle");
                return;
            }
            guard.request = Some(request);
        }
        Self::try_construct(&self.inner);
    }

    /// Подменяет строки без пересоздания экземпляра.
    ///
    /// Пока экземпляр ещё не создан, строки подменяются в ожидающем запросе.
    pub fn refresh(&self, rows: Vec<Value>) {
        let instance = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            match &inner.slot {
                Slot::Mounted(instance) => instance.clone(),
                Slot::Idle | Slot::Pending(_) => {
                    if let Some(request) = inner.request.as_mut() {
                        request.rows = rows;
                    }
                    return;
                }
                Slot::Failed | Slot::Unmounted => return,
            }
        };
        log::debug!("tui_grid: resetData with {} rows", rows.len());
        instance.reset_data(&rows);
    }

    /// Отменяет ожидающий повтор и уничтожает экземпляр. Идемпотентен.
    pub fn unmount(&self) {
        let (pending, instance) = {
            let mut guard = self.inner.borrow_mut();
            guard.request = None;
            match std::mem::replace(&mut guard.slot, Slot::Unmounted) {
                Slot::Pending(handle) => (Some(handle), None),
                Slot::Mounted(instance) => (None, Some(instance)),
                _ => (None, None),
            }
        };

        if let Some(handle) = pending {
            log::debug!("tui_grid: pending retry cancelled");
            self.inner.borrow().timer.cancel(handle);
        }
        if let Some(instance) = instance {
            log::debug!("tui_grid: instance destroyed");
            instance.destroy();
        }
    }

    fn try_construct(cell: &Rc<RefCell<Inner<L, T>>>) {
        let ready = {
            let mut guard = cell.borrow_mut();
            let inner = &mut *guard;

            if !matches!(inner.slot, Slot::Idle | Slot::Pending(_)) {
                return;
            }

            if !inner.library.is_loaded() {
                inner.attempts += 1;
                log::debug!(
                    "tui_grid: library not loaded yet, retry #{} in {} ms",
                    inner.attempts,
                    inner.retry_interval_ms
                );
                let weak = Rc::downgrade(cell);
                let handle = inner.timer.schedule(
                    inner.retry_interval_ms,
                    Box::new(move || {
                        // Адаптер уже уничтожен: повтор некому выполнять
                        if let Some(cell) = weak.upgrade() {
                            Self::try_construct(&cell);
                        }
                    }),
                );
                inner.slot = Slot::Pending(handle);
                return;
            }

            let Some(request) = inner.request.take() else {
                return;
            };

            match inner.library.create(
                &request.container,
                &request.rows,
                &request.columns,
                &request.options,
            ) {
                Ok(instance) => {
                    log::info!(
                        "tui_grid: instance created ({} rows, {} columns)",
                        request.rows.len(),
                        request.columns.len()
                    );
                    if let Some(on_click) = request.on_click {
                        let grid = instance.clone();
                        instance.on(
                            "click",
                            Rc::new(move |event: GridEvent| on_click(&event, &grid)),
                        );
                    }
                    inner.slot = Slot::Mounted(instance.clone());
                    request.on_ready.map(|on_ready| (on_ready, instance))
                }
                Err(err) => {
                    log::error!("tui_grid: {}", err);
                    inner.slot = Slot::Failed;
                    None
                }
            }
        };

        // Колбэк вызывается вне заимствования: он может обратиться к адаптеру
        if let Some((on_ready, instance)) = ready {
            on_ready(&instance);
        }
    }
}

impl<L: GridLibrary, T: RetryTimer> Drop for GridAdapter<L, T> {
    fn drop(&mut self) {
        self.unmount();
    }
}
