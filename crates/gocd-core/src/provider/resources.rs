//! Built-in resource and data-source schemas

use super::schema::{AttributeSchema as Attr, AttributeType as Ty, ResourceSchema};

/// Resource kinds managed by the provider
pub fn resources() -> Vec<ResourceSchema> {
    vec![
        environment(),
        environment_association(),
        pipeline_template(),
        pipeline(),
        pipeline_stage(),
    ]
}

/// Data-source kinds offered by the provider
pub fn data_sources() -> Vec<ResourceSchema> {
    vec![job_definition(), task_definition()]
}

fn environment() -> ResourceSchema {
    ResourceSchema::resource("gocd_environment", "A GoCD environment grouping pipelines and agents.")
        .with_attribute(Attr::required("name", Ty::String).describe("Name of the environment."))
        .with_attribute(Attr::computed("pipelines", Ty::StringList))
        .with_attribute(Attr::computed("agents", Ty::StringList))
        .with_attribute(Attr::computed("environment_variables", Ty::StringList))
        .with_attribute(Attr::computed("version", Ty::String))
}

fn environment_association() -> ResourceSchema {
    ResourceSchema::resource(
        "gocd_environment_association",
        "Associates a pipeline with a GoCD environment.",
    )
    .with_attribute(Attr::required("environment", Ty::String))
    .with_attribute(Attr::required("pipeline", Ty::String))
    .with_attribute(Attr::computed("version", Ty::String))
}

fn pipeline_template() -> ResourceSchema {
    ResourceSchema::resource("gocd_pipeline_template", "A reusable template of pipeline stages.")
        .with_attribute(Attr::required("name", Ty::String))
        .with_attribute(
            Attr::optional_computed("stages", Ty::StringList)
                .describe("JSON encoded stage definitions."),
        )
        .with_attribute(Attr::computed("version", Ty::String))
}

fn pipeline() -> ResourceSchema {
    ResourceSchema::resource("gocd_pipeline", "A GoCD pipeline configuration.")
        .with_attribute(Attr::required("name", Ty::String))
        .with_attribute(Attr::required("group", Ty::String))
        .with_attribute(
            Attr::optional("template", Ty::String)
                .describe("Template to build the pipeline's stages from."),
        )
        .with_attribute(Attr::optional("label_template", Ty::String))
        .with_attribute(Attr::optional("enable_pipeline_locking", Ty::Bool))
        .with_attribute(Attr::optional("parameters", Ty::StringMap))
        .with_attribute(Attr::optional("environment_variables", Ty::StringList))
        .with_attribute(
            Attr::required("materials", Ty::StringList)
                .describe("JSON encoded material definitions."),
        )
        .with_attribute(Attr::computed("version", Ty::String))
}

fn pipeline_stage() -> ResourceSchema {
    ResourceSchema::resource(
        "gocd_pipeline_stage",
        "A stage attached to a pipeline or pipeline template.",
    )
    .with_attribute(Attr::required("name", Ty::String))
    .with_attribute(Attr::optional("pipeline", Ty::String))
    .with_attribute(Attr::optional("pipeline_template", Ty::String))
    .with_attribute(Attr::optional("fetch_materials", Ty::Bool))
    .with_attribute(Attr::optional("clean_working_directory", Ty::Bool))
    .with_attribute(Attr::optional("never_cleanup_artifacts", Ty::Bool))
    .with_attribute(Attr::optional("manual_approval", Ty::Bool))
    .with_attribute(Attr::optional("authorization_users", Ty::StringList))
    .with_attribute(Attr::optional("authorization_roles", Ty::StringList))
    .with_attribute(Attr::optional("environment_variables", Ty::StringList))
    .with_attribute(
        Attr::required("jobs", Ty::StringList).describe("JSON encoded job definitions."),
    )
    .with_attribute(Attr::optional("index", Ty::Int))
}

fn job_definition() -> ResourceSchema {
    ResourceSchema::data_source(
        "gocd_job_definition",
        "Renders a job definition to JSON for use in stages.",
    )
    .with_attribute(Attr::required("name", Ty::String))
    .with_attribute(Attr::optional("run_instance_count", Ty::Int))
    .with_attribute(Attr::optional("timeout", Ty::Int))
    .with_attribute(Attr::optional("environment_variables", Ty::StringList))
    .with_attribute(Attr::optional("resources", Ty::StringList))
    .with_attribute(Attr::required("tasks", Ty::StringList))
    .with_attribute(Attr::optional("tabs", Ty::StringList))
    .with_attribute(Attr::optional("artifacts", Ty::StringList))
    .with_attribute(Attr::optional("elastic_profile_id", Ty::String))
    .with_attribute(Attr::computed("json", Ty::String))
}

fn task_definition() -> ResourceSchema {
    ResourceSchema::data_source(
        "gocd_task_definition",
        "Renders a task definition to JSON for use in jobs.",
    )
    .with_attribute(
        Attr::required("type", Ty::String)
            .describe("One of exec, ant, nant, rake or fetch."),
    )
    .with_attribute(Attr::optional("run_if", Ty::StringList))
    .with_attribute(Attr::optional("command", Ty::String))
    .with_attribute(Attr::optional("arguments", Ty::StringList))
    .with_attribute(Attr::optional("working_directory", Ty::String))
    .with_attribute(Attr::optional("build_file", Ty::String))
    .with_attribute(Attr::optional("target", Ty::String))
    .with_attribute(Attr::optional("pipeline", Ty::String))
    .with_attribute(Attr::optional("stage", Ty::String))
    .with_attribute(Attr::optional("job", Ty::String))
    .with_attribute(Attr::optional("source", Ty::String))
    .with_attribute(Attr::optional("is_source_a_file", Ty::Bool))
    .with_attribute(Attr::optional("destination", Ty::String))
    .with_attribute(Attr::computed("json", Ty::String))
}
