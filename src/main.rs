use std::{env, fs, io, path::PathBuf};

use futures::{executor::block_on, StreamExt};
use push_rx::prelude::*;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum FileReadError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("file is unreadable: {0}")]
    Unreadable(PathBuf),

    #[error("file is not valid UTF-8: {0}")]
    Encoding(PathBuf),
}

fn load_text(path: PathBuf) -> Single<String> {
    Single::create(move |single| {
        let disposable = Disposable::empty();
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                single.error(share_error(FileReadError::NotFound(path.clone())));
                return disposable;
            }
            Err(_) => {
                single.error(share_error(FileReadError::Unreadable(path.clone())));
                return disposable;
            }
        };

        match String::from_utf8(data) {
            Ok(contents) => single.success(contents),
            Err(_) => single.error(share_error(FileReadError::Encoding(path.clone()))),
        }

        disposable
    })
}

fn example(of: &str, action: impl FnOnce()) {
    println!("\n--- Example of: {of} ---");
    action();
}

fn printing_subscriber<T: std::fmt::Debug + 'static>() -> Subscriber<T> {
    Subscriber::new()
        .on_next(|element| println!("element {element:?}"))
        .on_error(|error| println!("error {error}"))
        .on_completed(|| println!("completed"))
        .on_disposed(|| println!("disposed"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("push_rx=debug")),
        )
        .init();

    let text_file = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Cargo.toml"));
    let bag = DisposeBag::new();

    example("just, of, from", || {
        let (one, two, three) = (1, 2, 3);

        Observable::just(one)
            .subscribe(printing_subscriber())
            .disposed_by(&bag);
        Observable::of([one, two, three])
            .subscribe(printing_subscriber())
            .disposed_by(&bag);
        Observable::just(vec![one, two, three])
            .subscribe(printing_subscriber())
            .disposed_by(&bag);
        Observable::from(vec![one, two, three])
            .subscribe(printing_subscriber())
            .disposed_by(&bag);
    });

    example("subscribe", || {
        Observable::of(["A", "B", "C"])
            .subscribe_event(|event| println!("{event}"))
            .disposed_by(&bag);
    });

    example("empty", || {
        Observable::<()>::empty()
            .subscribe(printing_subscriber())
            .disposed_by(&bag);
    });

    example("never", || {
        // Stays silent until the bag is torn down at the end of `main`.
        Observable::<i32>::never()
            .subscribe(printing_subscriber())
            .disposed_by(&bag);
    });

    example("range", || {
        Observable::range(1, 10)
            .subscribe_next(|element| {
                let n = element as f64;
                let fibonacci = ((1.61803_f64.powf(n) - 0.61803_f64.powf(n)) / 2.23606).round();

                println!("{fibonacci}");
            })
            .disposed_by(&bag);
    });

    example("map operator", || {
        Observable::range(1, 10)
            .map(|element| 2 * element)
            .subscribe_next(|element| println!("element: {element}"))
            .disposed_by(&bag);
    });

    example("dispose", || {
        let subscription =
            Observable::of(["A", "B", "C"]).subscribe_event(|event| println!("event: {event}"));

        subscription.dispose();
    });

    example("DisposeBag", || {
        let local_bag = DisposeBag::new();

        Observable::of(["A", "B", "C"])
            .subscribe_event(|event| println!("{event}"))
            .disposed_by(&local_bag);
    });

    example("create", || {
        Observable::create(|observer| {
            observer.on_next("1");
            observer.on_next("2");
            observer.on_completed();
            observer.on_next("3");

            Disposable::empty()
        })
        .subscribe(printing_subscriber())
        .disposed_by(&bag);
    });

    example("deferred", || {
        let mut flip = false;
        let factory = Observable::deferred(move || {
            flip = !flip;

            if flip {
                Observable::of([1, 2, 3])
            } else {
                Observable::of([4, 5, 6])
            }
        });

        for _ in 0..4 {
            factory
                .subscribe_next(|element| print!("{element}"))
                .disposed_by(&bag);
            println!();
        }
    });

    example("Single", || {
        for path in [text_file.clone(), PathBuf::from("missing.txt")] {
            load_text(path)
                .subscribe(|result| match result {
                    Ok(contents) => println!("{} bytes loaded", contents.len()),
                    Err(error) => println!("{error}"),
                })
                .disposed_by(&bag);
        }
    });

    example("do", || {
        Observable::of([1, 2, 3])
            .tap(
                Tap::new()
                    .on_next(|element| println!("do.element: {element}"))
                    .on_error(|error| println!("do.error: {error}"))
                    .on_completed(|| println!("do.complete"))
                    .on_subscribe(|| println!("do.subscribe"))
                    .on_subscribed(|| println!("do.subscribed"))
                    .on_dispose(|| println!("do.disposed")),
            )
            .subscribe(
                Subscriber::new()
                    .on_next(|element| println!("do.then.onNext.element: {element}"))
                    .on_error(|error| println!("do.then.error: {error}"))
                    .on_completed(|| println!("do.then.complete"))
                    .on_disposed(|| println!("do.then.disposed")),
            )
            .disposed_by(&bag);
    });

    example("debug", || {
        Observable::of([1, 2, 3, 4])
            .debug()
            .subscribe(printing_subscriber())
            .disposed_by(&bag);
    });

    example("to_stream", || {
        let all_events = block_on(Observable::range(1, 3).to_stream().collect::<Vec<_>>());

        println!("{} events collected", all_events.len());
    });

    bag.dispose();
}
