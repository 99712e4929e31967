// Transform interactor - Orchestrates validate -> resolve -> build -> execute

use std::sync::Arc;
use tracing::info;

use crate::app::time_range::TimeRangeResolver;
use crate::domain::commands::{CommandBuilder, CommandLine};
use crate::domain::model::{Operation, OperationKind, TimeMarkers, TimeRange};
use crate::domain::rules::ParameterValidator;
use crate::error::FfShortResult;
use crate::ports::{ExecutePort, ProbePort, ToolOutput};

/// One requested transformation
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    pub operation: Operation<TimeMarkers>,
    pub output_path: String,
}

impl TransformRequest {
    pub fn new(operation: Operation<TimeMarkers>, output_path: impl Into<String>) -> Self {
        Self {
            operation,
            output_path: output_path.into(),
        }
    }
}

/// A validated, resolved transformation ready to run
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTransform {
    pub kind: OperationKind,
    pub range: Option<TimeRange>,
    pub output_path: String,
    pub command: CommandLine,
}

/// Result of a finished transformation
#[derive(Debug, Clone)]
pub struct TransformReport {
    pub output_path: String,
    pub command: CommandLine,
    pub tool_output: ToolOutput,
}

/// Transform interactor
pub struct TransformInteractor {
    resolver: TimeRangeResolver,
    execute_port: Arc<dyn ExecutePort>,
    builder: CommandBuilder,
}

impl TransformInteractor {
    /// Create new transform interactor
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        builder: CommandBuilder,
    ) -> Self {
        Self {
            resolver: TimeRangeResolver::new(probe_port),
            execute_port,
            builder,
        }
    }

    /// Validate the request, resolve its time range and build the command.
    /// Nothing is executed.
    pub async fn prepare(&self, request: TransformRequest) -> FfShortResult<PreparedTransform> {
        let kind = request.operation.kind();
        info!("Preparing {} for {}", kind, request.operation.primary_input());

        ParameterValidator::validate(&request.operation)?;

        let operation = self.resolver.resolve_operation(request.operation).await?;
        let command = self.builder.build(&operation, &request.output_path);

        Ok(PreparedTransform {
            kind,
            range: operation.range().cloned(),
            output_path: request.output_path,
            command,
        })
    }

    /// Run a prepared command to completion
    pub async fn run(&self, prepared: PreparedTransform) -> FfShortResult<TransformReport> {
        let tool_output = self.execute_port.run(&prepared.command).await?;
        info!("{} wrote {}", prepared.kind, prepared.output_path);

        Ok(TransformReport {
            output_path: prepared.output_path,
            command: prepared.command,
            tool_output,
        })
    }
}
