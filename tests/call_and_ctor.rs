use namewire::{
    BoxError, Construct, Container, ContainerError, Dependencies, RegisterOptions, Resolver,
    ResolvedList,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

struct Config {
    url: String,
}

struct Client {
    config: Arc<Config>,
    retries: u32,
}

impl Construct for Client {
    fn dependencies() -> Dependencies {
        Dependencies::of(["config", "retries"])
    }

    fn construct(mut args: ResolvedList) -> Result<Self, BoxError> {
        Ok(Client {
            config: args.take::<Config>()?,
            retries: *args.take::<u32>()?,
        })
    }
}

fn wired_container() -> Container {
    let container = Container::new();
    container
        .register_instance(
            "config",
            Config { url: "amqp://localhost".to_string() },
            RegisterOptions::default(),
        )
        .unwrap();
    container
        .register_instance("retries", 3u32, RegisterOptions::default())
        .unwrap();
    container
}

#[tokio::test]
async fn call_injects_resolved_values() {
    let container = wired_container();

    let summary = container
        .call(["config", "retries"], |mut args: ResolvedList| async move {
            let config = args.take::<Config>()?;
            let retries = args.take::<u32>()?;
            Ok(format!("{} x{}", config.url, retries))
        })
        .await
        .unwrap();

    assert_eq!(summary, "amqp://localhost x3");
}

#[tokio::test]
async fn call_short_circuits_on_dependency_failure() {
    let container = wired_container();
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = invoked.clone();

    let result = container
        .call(["config", "ghost"], move |_args: ResolvedList| {
            flag.store(true, Ordering::SeqCst);
            async move { Ok(0u32) }
        })
        .await;

    match result {
        Err(ContainerError::UnknownService(name)) => assert_eq!(name, "ghost"),
        other => panic!("expected UnknownService, got {:?}", other),
    }
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn call_wraps_function_failures() {
    let container = wired_container();

    let result = container
        .call(Dependencies::none(), |_args: ResolvedList| async move {
            Err::<u32, BoxError>("refused".into())
        })
        .await;

    match result {
        Err(ContainerError::Factory { source, .. }) => assert_eq!(source.to_string(), "refused"),
        other => panic!("expected Factory error, got {:?}", other),
    }
}

#[tokio::test]
async fn ctor_instances_carry_injected_state() {
    let container = wired_container();
    container
        .register_ctor::<Client>("client", RegisterOptions::default())
        .unwrap();

    // The downcast itself proves type identity: the value really is a Client
    // built by Client::construct.
    let client = container.get::<Client>("client").await.unwrap();
    assert_eq!(client.config.url, "amqp://localhost");
    assert_eq!(client.retries, 3);

    // Constructed singletons share the usual cache.
    let again = container.get::<Client>("client").await.unwrap();
    assert!(Arc::ptr_eq(&client, &again));
}

#[tokio::test]
async fn ctor_dependency_failure_propagates_unwrapped() {
    let container = Container::new();
    // "config" and "retries" are missing entirely.
    container
        .register_ctor::<Client>("client", RegisterOptions::default())
        .unwrap();

    match container.resolve("client").await {
        Err(ContainerError::UnknownService(name)) => assert_eq!(name, "config"),
        other => panic!("expected UnknownService, got {:?}", other),
    }
}

#[tokio::test]
async fn factory_resolves_ad_hoc_through_its_context() {
    let container = Container::new();
    container
        .register_instance("base", 7u32, RegisterOptions::default())
        .unwrap();

    container
        .register(
            "tripled",
            Dependencies::none(),
            |ctx, _args| async move {
                let base = ctx.get::<u32>("base").await?;
                Ok(*base * 3)
            },
            RegisterOptions::default(),
        )
        .unwrap();

    assert_eq!(*container.get::<u32>("tripled").await.unwrap(), 21);
}
