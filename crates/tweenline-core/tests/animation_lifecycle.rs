use std::cell::RefCell;
use std::rc::Rc;

use tweenline_core::AnimationSpec;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Start(f64),
    Tick(f64),
    End(f64),
}

type Log = Rc<RefCell<Vec<Event>>>;

fn recorded_spec(duration: f64, log: &Log) -> AnimationSpec {
    let (s, t, e) = (Rc::clone(log), Rc::clone(log), Rc::clone(log));
    AnimationSpec::new(duration)
        .on_start(move |p| s.borrow_mut().push(Event::Start(p)))
        .on_tick(move |p| t.borrow_mut().push(Event::Tick(p)))
        .on_end(move |p| e.borrow_mut().push(Event::End(p)))
}

#[test]
fn first_advance_only_anchors_the_clock() {
    let log: Log = Rc::default();
    let (mut anim, _handle) = recorded_spec(100.0, &log).build();

    assert!(!anim.advance(0.0));
    assert_eq!(*log.borrow(), vec![Event::Start(0.0)]);
}

#[test]
fn full_lifecycle_at_duration_100() {
    let log: Log = Rc::default();
    let (mut anim, handle) = recorded_spec(100.0, &log).build();

    assert!(!anim.advance(0.0));
    assert!(!anim.advance(50.0));
    assert!(anim.advance(100.0));
    assert_eq!(
        *log.borrow(),
        vec![Event::Start(0.0), Event::Tick(0.5), Event::End(1.0)]
    );
    assert!(handle.is_finished());

    // Terminal state is sticky and silent.
    assert!(anim.advance(150.0));
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn zero_duration_ends_on_second_advance() {
    let log: Log = Rc::default();
    let (mut anim, _handle) = recorded_spec(0.0, &log).build();

    assert!(!anim.advance(10.0));
    assert!(anim.advance(10.0));
    assert_eq!(*log.borrow(), vec![Event::Start(0.0), Event::End(1.0)]);
}

#[test]
fn missing_callbacks_default_to_noops() {
    let (mut anim, _handle) = AnimationSpec::new(10.0).build();
    assert!(!anim.advance(0.0));
    assert!(!anim.advance(5.0));
    assert!(anim.advance(10.0));
}

#[test]
fn cancel_suppresses_all_further_callbacks() {
    let log: Log = Rc::default();
    let (mut anim, handle) = recorded_spec(100.0, &log).build();

    anim.advance(0.0);
    anim.advance(25.0);
    handle.cancel();
    assert!(handle.is_finished());

    // No tick, no end, ever again.
    assert!(anim.advance(50.0));
    assert!(anim.advance(100.0));
    assert_eq!(*log.borrow(), vec![Event::Start(0.0), Event::Tick(0.25)]);
}

#[test]
fn cancel_is_idempotent() {
    let (mut anim, handle) = AnimationSpec::new(100.0).build();
    anim.advance(0.0);
    handle.cancel();
    handle.cancel();
    assert!(anim.advance(50.0));
    handle.cancel();
    assert!(handle.is_finished());
}

#[test]
fn cancel_from_within_own_tick() {
    let log: Log = Rc::default();
    let slot: Rc<RefCell<Option<tweenline_core::AnimationHandle>>> = Rc::default();

    let (t_log, t_slot) = (Rc::clone(&log), Rc::clone(&slot));
    let (mut anim, handle) = AnimationSpec::new(100.0)
        .on_tick(move |p| {
            t_log.borrow_mut().push(Event::Tick(p));
            if let Some(h) = t_slot.borrow().as_ref() {
                h.cancel();
            }
        })
        .on_end(|_| panic!("end must not fire after self-cancel"))
        .build();
    *slot.borrow_mut() = Some(handle);

    anim.advance(0.0);
    assert!(!anim.advance(50.0)); // the cancelling tick itself still completes
    assert!(anim.advance(100.0)); // observed on the next advance, no end callback
    assert_eq!(*log.borrow(), vec![Event::Tick(0.5)]);
}

#[test]
fn progress_is_linear_not_eased() {
    let log: Log = Rc::default();
    let (mut anim, _handle) = recorded_spec(200.0, &log).build();

    anim.advance(1000.0);
    anim.advance(1050.0);
    anim.advance(1150.0);
    assert_eq!(
        *log.borrow(),
        vec![Event::Start(0.0), Event::Tick(0.25), Event::Tick(0.75)]
    );
}
