//! Executes controller commands against the browser.

use std::cell::RefCell;
use std::rc::Rc;

use controller::{
    AppController, ChartRenderer, Command, Event, PredictionResponse, RecordsResponse,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::api_client::{prediction, records, upload};
use crate::common::toast::ToastContext;
use crate::components::dashboard::PlotlySurface;

pub type AppEvent = Event<File>;
pub type AppCommand = Command<File>;

/// Feeds events into the controller and runs the commands it returns.
///
/// Network completions are sent back through [`Dispatcher::send`], so all
/// state changes go through the controller.
#[derive(Clone)]
pub struct Dispatcher {
    controller: Rc<RefCell<AppController>>,
    chart: Rc<RefCell<ChartRenderer<PlotlySurface>>>,
    rerender: UseForceUpdateHandle,
    toasts: Option<ToastContext>,
}

impl Dispatcher {
    pub fn new(
        controller: Rc<RefCell<AppController>>,
        chart: Rc<RefCell<ChartRenderer<PlotlySurface>>>,
        rerender: UseForceUpdateHandle,
        toasts: Option<ToastContext>,
    ) -> Self {
        Self {
            controller,
            chart,
            rerender,
            toasts,
        }
    }

    pub fn send(&self, event: AppEvent) {
        let commands = self.controller.borrow_mut().apply(event);
        self.rerender.force_update();
        for command in commands {
            self.run(command);
        }
    }

    /// Callback that sends the event built from the callback's input.
    pub fn callback<IN, M>(&self, make_event: M) -> Callback<IN>
    where
        IN: 'static,
        M: Fn(IN) -> AppEvent + 'static,
    {
        let dispatcher = self.clone();
        Callback::from(move |input: IN| dispatcher.send(make_event(input)))
    }

    fn run(&self, command: AppCommand) {
        match command {
            Command::FetchRecords(request) => {
                let dispatcher = self.clone();
                spawn_local(async move {
                    let result = records::get_records(request.query()).await;
                    dispatcher.send(Event::RecordsLoaded(RecordsResponse { request, result }));
                });
            }
            Command::SubmitUpload(file) => {
                let dispatcher = self.clone();
                spawn_local(async move {
                    let result = upload::upload_csv(file).await;
                    dispatcher.send(Event::UploadFinished(result));
                });
            }
            Command::FetchPrediction(request) => {
                let dispatcher = self.clone();
                spawn_local(async move {
                    let result = prediction::get_prediction(request.query()).await;
                    dispatcher.send(Event::PredictionLoaded(PredictionResponse { request, result }));
                });
            }
            Command::RenderChart(chart) => self.chart.borrow_mut().render(&chart),
            Command::Prompt(message) => {
                log::debug!("Prompting user: {}", message);
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.alert_with_message(&message) {
                        log::error!("Failed to show prompt: {:?}", e);
                    }
                }
            }
            Command::ReportError(message) => match &self.toasts {
                Some(toasts) => toasts.show_error(message),
                None => log::error!("{}", message),
            },
        }
    }
}
