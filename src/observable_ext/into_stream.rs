use std::{
    pin::Pin,
    task::{Context, Poll},
};

use futures::{
    channel::mpsc::{self, UnboundedReceiver},
    ready,
    stream::FusedStream,
    Stream,
};
use pin_project_lite::pin_project;

use crate::{Disposable, Event, Observable, SharedError};

struct SubscriptionGuard(Disposable);

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.0.dispose();
    }
}

pin_project! {
    /// Stream for the [`to_stream`](crate::RxExt::to_stream) method.
    #[must_use = "streams do nothing unless polled"]
    pub struct EventStream<T> {
        #[pin]
        receiver: UnboundedReceiver<Event<T>>,
        subscription: SubscriptionGuard,
        is_done: bool,
    }
}

impl<T: 'static> EventStream<T> {
    pub(crate) fn new(source: &Observable<T>) -> Self {
        let (sender, receiver) = mpsc::unbounded();
        let subscription = source.subscribe_event(move |event| {
            // The receiver is gone once the stream was dropped, which also
            // disposes this subscription.
            let _ = sender.unbounded_send(event);
        });

        Self {
            receiver,
            subscription: SubscriptionGuard(subscription),
            is_done: false,
        }
    }
}

impl<T> FusedStream for EventStream<T> {
    fn is_terminated(&self) -> bool {
        self.is_done
    }
}

impl<T> Stream for EventStream<T> {
    type Item = Result<T, SharedError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.is_done {
            return Poll::Ready(None);
        }

        let item = match ready!(this.receiver.poll_next(cx)) {
            Some(Event::Next(value)) => return Poll::Ready(Some(Ok(value))),
            Some(Event::Error(error)) => Some(Err(error)),
            Some(Event::Completed) | None => None,
        };

        *this.is_done = true;
        this.subscription.0.dispose();

        Poll::Ready(item)
    }
}
