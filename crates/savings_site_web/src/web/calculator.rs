use std::cell::RefCell;
use std::rc::Rc;

use savings_site::animation::{AnimationRun, RunGeneration};
use savings_site::calculator::{clamp_committed, SavingsInput};
use savings_site::{NumberFormat, NumberLocale};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use super::dom::{element_by_id, listen, restart_class};

pub(super) const HOURS_INPUT_ID: &str = "hours-saved";
pub(super) const WAGE_INPUT_ID: &str = "hourly-wage";
pub(super) const MONTHLY_OUTPUT_ID: &str = "monthly-savings";
pub(super) const YEARLY_OUTPUT_ID: &str = "yearly-savings";

/// Class whose CSS animation is replayed on every recompute.
const RESULT_CLASS: &str = "result-value";

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Output {
    el: HtmlElement,
    generation: RunGeneration,
}

struct Calculator {
    hours: HtmlInputElement,
    wage: HtmlInputElement,
    monthly: Rc<Output>,
    yearly: Rc<Output>,
    locale: NumberLocale,
    duration_ms: f64,
}

impl Calculator {
    fn from_document(
        document: &Document,
        locale: NumberLocale,
        duration_ms: f64,
    ) -> Result<Self, String> {
        let hours = element_by_id::<HtmlInputElement>(document, HOURS_INPUT_ID)?;
        let wage = element_by_id::<HtmlInputElement>(document, WAGE_INPUT_ID)?;
        let monthly = element_by_id::<HtmlElement>(document, MONTHLY_OUTPUT_ID)?;
        let yearly = element_by_id::<HtmlElement>(document, YEARLY_OUTPUT_ID)?;

        Ok(Self {
            hours,
            wage,
            monthly: Rc::new(Output {
                el: monthly,
                generation: RunGeneration::new(),
            }),
            yearly: Rc::new(Output {
                el: yearly,
                generation: RunGeneration::new(),
            }),
            locale,
            duration_ms,
        })
    }

    fn recalculate(&self) {
        let savings = SavingsInput::from_raw(&self.hours.value(), &self.wage.value()).savings();
        tracing::trace!(
            monthly = savings.monthly,
            yearly = savings.yearly,
            "savings recomputed"
        );

        animate_value(&self.monthly, 0.0, savings.monthly, self.duration_ms, self.locale);
        animate_value(&self.yearly, 0.0, savings.yearly, self.duration_ms, self.locale);
    }
}

/// Wires the calculator if all four of its elements are on the page.
pub(super) fn install(document: &Document, locale: NumberLocale, duration_ms: f64) {
    let calc = match Calculator::from_document(document, locale, duration_ms) {
        Ok(calc) => Rc::new(calc),
        Err(e) => {
            tracing::debug!("calculator disabled: {e}");
            return;
        }
    };

    for input in [&calc.hours, &calc.wage] {
        let on_input = calc.clone();
        if let Err(e) = listen(input, "input", move |_| on_input.recalculate()) {
            tracing::warn!("calculator: {e}");
        }

        let field = input.clone();
        if let Err(e) = listen(input, "change", move |_| clamp_field(&field)) {
            tracing::warn!("calculator: {e}");
        }
    }

    calc.recalculate();
}

/// Commit-time check. Does not recompute; the next input event will.
fn clamp_field(input: &HtmlInputElement) {
    if let Some(clamped) = clamp_committed(&input.value()) {
        input.set_value(clamped);
    }
}

/// Counts `output` from `start` to `end`, one write per animation frame.
///
/// Starting a run supersedes any run still in flight on the same output:
/// the older frame callback sees a stale generation and releases itself.
fn animate_value(output: &Rc<Output>, start: f64, end: f64, duration_ms: f64, locale: NumberLocale) {
    restart_class(&output.el, RESULT_CLASS);

    let started_at = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    let run = AnimationRun::new(start, end, started_at, duration_ms);
    let generation = output.generation.begin();

    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let slot_inner = slot.clone();
    let output = output.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if !output.generation.is_current(generation) {
            let _ = slot_inner.borrow_mut().take();
            return;
        }

        let frame = run.frame(now);
        output
            .el
            .set_text_content(Some(&locale.format_currency(frame.value)));

        if frame.done {
            let _ = slot_inner.borrow_mut().take();
        } else if let Err(e) = request_frame(&slot_inner) {
            tracing::warn!("calculator animation stopped: {e}");
            let _ = slot_inner.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    if let Err(e) = request_frame(&slot) {
        tracing::warn!("calculator animation not started: {e}");
        let _ = slot.borrow_mut().take();
    }
}

fn request_frame(slot: &FrameSlot) -> Result<i32, String> {
    let window = web_sys::window().ok_or("no window".to_string())?;
    let slot = slot.borrow();
    let cb = slot
        .as_ref()
        .ok_or("frame callback already released".to_string())?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|_| "requestAnimationFrame failed".to_string())
}
