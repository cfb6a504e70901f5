use std::f64::consts::SQRT_2;

use approx::assert_relative_eq;

use numsolve_core::Polynomial;

use super::{Action, Config, Event, Method, Outcome, Status};

fn third(x: f64) -> f64 {
    x - 1.0 / 3.0
}

#[test]
fn every_method_respects_the_iteration_cap() {
    // Zero tolerances can never be met by these problems, so each method
    // must run its full budget and report failure.
    let config = Config::new(20, 0.0, 0.0).expect("valid config");
    let cases: [(Method, fn(f64) -> f64, fn(f64) -> f64); 4] = [
        (Method::Bisection { a: 0.0, b: 1.0 }, third, |_| 1.0),
        (Method::Newton { x0: 1.0 }, |x| x * x - 2.0, |x| 2.0 * x),
        (Method::Secant { a: 0.0, b: 1.0 }, |x| x * x + 1.0, |x| 2.0 * x),
        (Method::Hybrid { a: 0.0, b: 1.0 }, third, |_| 1e-30),
    ];

    for (method, f, df) in cases {
        let solution = method.solve(f, df, &config, ()).expect("finite estimates");

        assert_eq!(solution.status, Status::MaxIters, "{}", method.name());
        assert_eq!(solution.outcome(), Outcome::Fail, "{}", method.name());
        assert_eq!(solution.iters, 20, "{}", method.name());
        assert!(solution.x.is_some(), "{}", method.name());
    }
}

#[test]
fn every_method_solves_the_cubic_via_polynomial() {
    // x³ − x − 2 from descending file order.
    let p = Polynomial::from_descending(vec![1.0, 0.0, -1.0, -2.0]);
    let root = 1.521_379_706_804_567_6;

    for method in [
        Method::Bisection { a: 1.0, b: 2.0 },
        Method::Newton { x0: 2.0 },
        Method::Secant { a: 1.0, b: 2.0 },
    ] {
        let solution = method
            .solve(|x| p.eval(x), |x| p.eval_derivative(x), &Config::default(), ())
            .expect("finite estimates");

        assert!(solution.is_success(), "{}", method.name());
        assert_relative_eq!(solution.x.unwrap(), root, epsilon = 1e-6);
    }

    // Hybrid only promises a point better than the last midpoint.
    let hybrid = Method::Hybrid { a: 1.0, b: 2.0 }
        .solve(|x| p.eval(x), |x| p.eval_derivative(x), &Config::default(), ())
        .expect("finite estimates");
    assert_eq!(hybrid.status, Status::NewtonAccepted);
    assert_relative_eq!(hybrid.x.unwrap(), root, epsilon = 1e-2);
}

#[test]
fn dispatch_forwards_the_observer() {
    let mut events = 0;
    let observer = |event: &Event| {
        events += 1;
        (event.iter() == 2).then_some(Action::StopEarly)
    };

    let solution = Method::Newton { x0: 1.0 }
        .solve(|x| x * x - 2.0, |x| 2.0 * x, &Config::default(), observer)
        .expect("finite estimate");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(events, 2);
}

#[test]
fn names_and_derivative_use() {
    assert_eq!(Method::Bisection { a: 0.0, b: 1.0 }.name(), "bisection");
    assert_eq!(Method::Secant { a: 0.0, b: 1.0 }.name(), "secant");
    assert!(Method::Newton { x0: SQRT_2 }.uses_derivative());
    assert!(Method::Hybrid { a: 0.0, b: 1.0 }.uses_derivative());
    assert!(!Method::Secant { a: 0.0, b: 1.0 }.uses_derivative());
}
