use anyhow::Result;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::WithExportConfig as _;
use opentelemetry_otlp::WithHttpConfig as _;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Installs the global tracer and meter providers for one service and
/// shuts them down when dropped. Both binaries create one of these
/// before anything else runs.
pub struct OpentelemetryHandler {
    tracer_provider: SdkTracerProvider,
    meter_provider: SdkMeterProvider,
}

impl OpentelemetryHandler {
    pub fn new(service_name: &'static str, service_version: &'static str) -> Result<Self> {
        let resource = Self::create_resource(service_name, service_version);

        let tracer_provider = Self::create_trace_exporter(resource.clone())?;
        let meter_provider = Self::create_metric_exporter(resource)?;

        let tracer = tracer_provider.tracer(service_name);

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(tracing_opentelemetry::MetricsLayer::new(
                meter_provider.clone(),
            ))
            .with(tracing_opentelemetry::OpenTelemetryLayer::new(tracer))
            .try_init()?;

        Ok(Self {
            tracer_provider,
            meter_provider,
        })
    }

    fn create_metric_exporter(resource: opentelemetry_sdk::Resource) -> Result<SdkMeterProvider> {
        let exporter = opentelemetry_otlp::MetricExporter::builder()
            .with_http()
            .with_protocol(opentelemetry_otlp::Protocol::HttpBinary)
            .with_compression(opentelemetry_otlp::Compression::Gzip)
            .build()?;

        let meter_provider = SdkMeterProvider::builder()
            .with_resource(resource)
            .with_periodic_exporter(exporter)
            .build();
        opentelemetry::global::set_meter_provider(meter_provider.clone());

        Ok(meter_provider)
    }

    fn create_trace_exporter(resource: opentelemetry_sdk::Resource) -> Result<SdkTracerProvider> {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_http()
            .with_protocol(opentelemetry_otlp::Protocol::HttpBinary)
            .with_compression(opentelemetry_otlp::Compression::Gzip)
            .build()?;

        let tracer_provider = SdkTracerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(exporter)
            .build();
        opentelemetry::global::set_tracer_provider(tracer_provider.clone());

        opentelemetry::global::set_text_map_propagator(
            opentelemetry_sdk::propagation::TraceContextPropagator::new(),
        );

        Ok(tracer_provider)
    }

    fn create_resource(
        service_name: &'static str,
        service_version: &'static str,
    ) -> opentelemetry_sdk::Resource {
        opentelemetry_sdk::Resource::builder()
            .with_service_name(service_name)
            .with_attribute(opentelemetry::KeyValue::new(
                opentelemetry_semantic_conventions::resource::SERVICE_VERSION,
                service_version,
            ))
            .with_detectors(&[
                Box::new(opentelemetry_resource_detectors::OsResourceDetector),
                Box::new(opentelemetry_resource_detectors::ProcessResourceDetector),
            ])
            .build()
    }
}

impl Drop for OpentelemetryHandler {
    fn drop(&mut self) {
        if let Err(err) = self.tracer_provider.shutdown() {
            eprintln!("{err:?}");
        }
        if let Err(err) = self.meter_provider.shutdown() {
            eprintln!("{err:?}");
        }
    }
}
