//! Health document fixtures
//!
//! Two real-world documents: a small API health page and a Spring Boot
//! worker with many actuator metrics.

/// API service health: two OK systems, nothing else
pub const API_JSON: &str = r#"{
	"overallStatus":"OK",
	"properties":{},
	"services":[],
	"systems":[
		{"status":"OK","name":"DBConnection","timeStamp":1538157610214,"timeout":null,"message":null,"error":null},
		{"status":"OK","name":"DBConnection","timeStamp":1538157610216,"timeout":null,"message":null,"error":null}
		],
		"metrics":[],
		"isPaused":false
}"#;

/// Worker health: four UP services, 28 metrics, the last of which breaches
/// its bad threshold
pub const WORKER_JSON: &str = r#"{
  "overallStatus" : "OK",
  "properties" : {
    "queues" : [ "https://sqs.us-east-1.amazonaws.com/290913789/policy_complete", "https://sqs.us-east-1.amazonaws.com/290913789/response_qa" ],
    "topics" : [ "arn:aws:sns:us-east-1:290913789:topic_system-events", "arn:aws:sns:us-east-1:290913789:topic_healthcheck" ],
    "name" : "workers.system.dataset",
    "host" : "worker-ateam-0201"
  },
  "services" : [ {
    "name" : "com.workers.health.AwsSqsHealthIndicator",
    "status" : "UP",
    "value" : { },
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154003,
    "timeout" : null,
    "error" : null,
    "message" : null
  }, {
    "name" : "com.workers.health.AwsSnsHealthIndicator",
    "status" : "UP",
    "value" : { },
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007,
    "timeout" : null,
    "error" : null,
    "message" : null
  }, {
    "name" : "org.springframework.boot.actuate.health.DiskSpaceHealthIndicator",
    "status" : "UP",
    "value" : {
      "total" : 10726932480,
      "free" : 9218899968,
      "threshold" : 10485760
    },
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007,
    "timeout" : null,
    "error" : null,
    "message" : null
  }, {
    "name" : "org.springframework.boot.actuate.health.MongoHealthIndicator",
    "status" : "UP",
    "value" : {
      "version" : "3.2.17"
    },
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007,
    "timeout" : null,
    "error" : null,
    "message" : null
  } ],
  "systems" : [ ],
  "metrics" : [ {
    "status" : "OK",
    "name" : "mem",
    "value" : 845643,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "mem.free",
    "value" : 324294,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "processors",
    "value" : 2,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "instance.uptime",
    "value" : 10294270,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "uptime",
    "value" : 10357719,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "systemload.average",
    "value" : 0.01,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "heap.committed",
    "value" : 726528,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "heap.init",
    "value" : 129024,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "heap.used",
    "value" : 402233,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "heap",
    "value" : 1817088,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "nonheap.committed",
    "value" : 121240,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "nonheap.init",
    "value" : 2496,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "nonheap.used",
    "value" : 119115,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "nonheap",
    "value" : 0,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "threads.peak",
    "value" : 146,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "threads.daemon",
    "value" : 25,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "threads.totalStarted",
    "value" : 155,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "threads",
    "value" : 143,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "classes",
    "value" : 13082,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "classes.loaded",
    "value" : 13082,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "classes.unloaded",
    "value" : 0,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "gc.ps_scavenge.count",
    "value" : 45,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "gc.ps_scavenge.time",
    "value" : 1654,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "gc.ps_marksweep.count",
    "value" : 3,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "gc.ps_marksweep.time",
    "value" : 1698,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538154007
  }, {
    "status" : "OK",
    "name" : "counter.job.start.total",
    "value" : 1,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538144099
  }, {
    "status" : "OK",
    "name" : "counter.job.start.active",
    "value" : 0,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "timeStamp" : 1538144102123
  }, {
    "name" : "broken.test.value",
    "value" : 6,
    "expectedValue" : null,
    "minValue" : null,
    "maxValue" : null,
    "warnOver": 0,
    "badOver": 5,
    "timeStamp" : 1538144102
  } ],
  "isPaused" : false
}"#;

/// Number of metrics in [`WORKER_JSON`]
pub const WORKER_METRICS: usize = 28;

/// Number of services in [`WORKER_JSON`]
pub const WORKER_SERVICES: usize = 4;
