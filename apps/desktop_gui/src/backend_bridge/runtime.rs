//! Backend worker: owns the tokio runtime and the HTTP transport.
//!
//! Commands arrive over a bounded crossbeam channel from the egui thread;
//! results go back as [`UiEvent`]s. One command is processed at a time; an
//! issued request always runs to completion (no cancellation).

use std::thread;

use client_core::{HttpRegistryClient, MutationOutcome, RegistryTransport, TransportError};
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{failure_alert, success_alert, Operation, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = HttpRegistryClient::new(server_url);
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::RefreshList => {
                        let records = client.list_trees_or_empty().await;
                        info!(count = records.len(), "backend: list refreshed");
                        let _ = ui_tx.try_send(UiEvent::ListLoaded(records));
                    }
                    BackendCommand::CreateTree { fields } => {
                        settle(&ui_tx, Operation::Create, client.create_tree(&fields).await);
                    }
                    BackendCommand::UpdateTree { fields, id } => {
                        settle(
                            &ui_tx,
                            Operation::Update,
                            client.update_tree(&fields, &id).await,
                        );
                    }
                    BackendCommand::DeleteTree { id } => {
                        settle(&ui_tx, Operation::Delete, client.delete_tree(&id).await);
                    }
                }
            }
        });
    });
}

/// Maps a settled write call to its single alert (or log line) and notifies
/// the UI so it can run the unconditional refresh.
fn settle(
    ui_tx: &Sender<UiEvent>,
    operation: Operation,
    result: Result<MutationOutcome, TransportError>,
) {
    let alert = match result {
        Ok(MutationOutcome::Completed) => {
            info!(operation = operation.verb(), "backend: mutation completed");
            Some(success_alert(operation))
        }
        Ok(MutationOutcome::Rejected { status }) => {
            warn!(
                operation = operation.verb(),
                status, "backend: registry rejected mutation"
            );
            Some(failure_alert(operation))
        }
        Err(err) => {
            // Request never reached the server; log only, as with list
            // failures. The refresh still runs.
            error!(operation = operation.verb(), "backend: {err}");
            None
        }
    };
    let _ = ui_tx.try_send(UiEvent::MutationSettled { operation, alert });
}
