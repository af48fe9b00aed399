//! Reveal Controller
//!
//! Drives the core [`RevealRegistry`] with an `IntersectionObserver`.
//! Elements register on mount, [`RevealController::schedule`] runs after
//! every route or content change, and the first visible intersection adds
//! the `active` class.

use gloo_timers::callback::Timeout;
use nefra_connect::reveal::{RevealConfig, RevealId, RevealRegistry};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct RevealInner {
    config: RevealConfig,
    registry: RefCell<RevealRegistry>,
    elements: RefCell<HashMap<RevealId, Element>>,
    observer: RefCell<Option<IntersectionObserver>>,
    callback: RefCell<Option<ObserverCallback>>,
    settle: RefCell<Option<Timeout>>,
}

#[derive(Clone)]
pub struct RevealController {
    inner: Rc<RevealInner>,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            inner: Rc::new(RevealInner {
                config,
                registry: RefCell::new(RevealRegistry::new()),
                elements: RefCell::new(HashMap::new()),
                observer: RefCell::new(None),
                callback: RefCell::new(None),
                settle: RefCell::new(None),
            }),
        }
    }

    pub fn register(&self, element: Element, key: &str, delay: Option<Duration>) -> RevealId {
        let mut registry = self.inner.registry.borrow_mut();
        let id = match delay {
            Some(delay) => registry.register_with_delay(key, delay),
            None => registry.register(key),
        };
        self.inner.elements.borrow_mut().insert(id, element);
        id
    }

    pub fn unregister(&self, id: RevealId) {
        self.inner.registry.borrow_mut().unregister(id);
        if let Some(element) = self.inner.elements.borrow_mut().remove(&id) {
            if let Some(observer) = self.inner.observer.borrow().as_ref() {
                observer.unobserve(&element);
            }
        }
    }

    /// Cancel any pending run, then observe pending elements once the
    /// settle delay has passed.
    pub fn schedule(&self) {
        self.teardown();

        let this = self.clone();
        let settle_ms = self.inner.config.settle_delay_ms.min(u32::MAX as u64) as u32;
        let timeout = Timeout::new(settle_ms, move || {
            this.inner.settle.borrow_mut().take();
            this.observe_pending();
        });
        *self.inner.settle.borrow_mut() = Some(timeout);
    }

    /// Cancel the settle delay and disconnect the observer
    pub fn teardown(&self) {
        // Dropping a gloo Timeout clears it
        self.inner.settle.borrow_mut().take();

        if let Some(observer) = self.inner.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.inner.callback.borrow_mut().take();
    }

    fn observe_pending(&self) {
        let step = self.inner.config.stagger_step();
        let assigned = self.inner.registry.borrow_mut().assign_stagger(step);
        if assigned.is_empty() {
            return;
        }

        let Some(observer) = self.create_observer() else {
            return;
        };

        let elements = self.inner.elements.borrow();
        for (id, delay) in assigned {
            let Some(element) = elements.get(&id) else {
                continue;
            };
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("transition-delay", &format!("{}ms", delay.as_millis()));
            }
            observer.observe(element);
        }
        drop(elements);

        *self.inner.observer.borrow_mut() = Some(observer);
    }

    fn create_observer(&self) -> Option<IntersectionObserver> {
        let weak = Rc::downgrade(&self.inner);

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };

                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let visible = entry.is_intersecting()
                        && inner.config.is_visible(entry.intersection_ratio());
                    if !visible {
                        continue;
                    }

                    let target = entry.target();
                    let id = inner
                        .elements
                        .borrow()
                        .iter()
                        .find(|(_, element)| **element == target)
                        .map(|(id, _)| *id);

                    if let Some(id) = id {
                        if inner.registry.borrow_mut().activate(id) {
                            let _ = target.class_list().add_1("active");
                        }
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.inner.config.threshold));
        init.set_root_margin(&self.inner.config.root_margin.to_string());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                *self.inner.callback.borrow_mut() = Some(callback);
                Some(observer)
            }
            Err(e) => {
                // Elements simply never activate
                web_sys::console::warn_1(
                    &format!("IntersectionObserver unavailable: {:?}", e).into(),
                );
                None
            }
        }
    }
}
