//! Templates for the built-in job list. They emit gocheck test methods on `kdfSuite`, one
//! helper per PRF and one test per vector.

pub const COUNTER_SUITE: &str = "\n\n\
func (s *kdfSuite) testCounterMode{prf}(c *C, data *testData) {\n\
\ts.testCounterMode(c, {prf_expr}, data)\n\
}";

pub const COUNTER_TEST: &str = "\n\n\
func (s *kdfSuite) TestCounterMode{prf}_{index}(c *C) {\n\
\ts.testCounterMode{prf}(c, &testData{\n\
\t\tkey:       decodeHexString(c, \"{key}\"),\n\
\t\tfixed:     decodeHexString(c, \"{fixed}\"),\n\
\t\tbitLength: {l},\n\
\t\texpected:  decodeHexString(c, \"{expected}\"),\n\
\t})\n\
}";

pub const FEEDBACK_NO_COUNTER_SUITE: &str = "\n\n\
func (s *kdfSuite) testFeedbackModeNoCounter{prf}(c *C, data *testData) {\n\
\ts.testFeedbackMode(c, {prf_expr}, data, false)\n\
}";

pub const FEEDBACK_NO_COUNTER_TEST: &str = "\n\n\
func (s *kdfSuite) TestFeedbackModeNoCounter{prf}_{index}(c *C) {\n\
\ts.testFeedbackModeNoCounter{prf}(c, &testData{\n\
\t\tkey:       decodeHexString(c, \"{key}\"),\n\
\t\tfixed:     decodeHexString(c, \"{fixed}\"),\n\
\t\tiv:        decodeHexString(c, \"{iv}\"),\n\
\t\tbitLength: {l},\n\
\t\texpected:  decodeHexString(c, \"{expected}\"),\n\
\t})\n\
}";

pub const FEEDBACK_NO_ZERO_IV_SUITE: &str = "\n\n\
func (s *kdfSuite) testFeedbackModeNoZeroIV{prf}(c *C, data *testData) {\n\
\ts.testFeedbackMode(c, {prf_expr}, data, true)\n\
}";

pub const FEEDBACK_NO_ZERO_IV_TEST: &str = "\n\n\
func (s *kdfSuite) TestFeedbackModeNoZeroIV{prf}_{index}(c *C) {\n\
\ts.testFeedbackModeNoZeroIV{prf}(c, &testData{\n\
\t\tkey:       decodeHexString(c, \"{key}\"),\n\
\t\tfixed:     decodeHexString(c, \"{fixed}\"),\n\
\t\tiv:        decodeHexString(c, \"{iv}\"),\n\
\t\tbitLength: {l},\n\
\t\texpected:  decodeHexString(c, \"{expected}\"),\n\
\t})\n\
}";

pub const FEEDBACK_ZERO_IV_SUITE: &str = "\n\n\
func (s *kdfSuite) testFeedbackModeZeroIV{prf}(c *C, data *testData) {\n\
\ts.testFeedbackMode(c, {prf_expr}, data, true)\n\
}";

pub const FEEDBACK_ZERO_IV_TEST: &str = "\n\n\
func (s *kdfSuite) TestFeedbackModeZeroIV{prf}_{index}(c *C) {\n\
\ts.testFeedbackModeZeroIV{prf}(c, &testData{\n\
\t\tkey:       decodeHexString(c, \"{key}\"),\n\
\t\tfixed:     decodeHexString(c, \"{fixed}\"),\n\
\t\tiv:        decodeHexString(c, \"{iv}\"),\n\
\t\tbitLength: {l},\n\
\t\texpected:  decodeHexString(c, \"{expected}\"),\n\
\t})\n\
}";

pub const PIPELINE_SUITE: &str = "\n\n\
func (s *kdfSuite) testPipelineMode{prf}(c *C, data *testData) {\n\
\ts.testPipelineMode(c, {prf_expr}, data, true)\n\
}";

pub const PIPELINE_TEST: &str = "\n\n\
func (s *kdfSuite) TestPipelineMode{prf}_{index}(c *C) {\n\
\ts.testPipelineMode{prf}(c, &testData{\n\
\t\tkey:       decodeHexString(c, \"{key}\"),\n\
\t\tfixed:     decodeHexString(c, \"{fixed}\"),\n\
\t\tbitLength: {l},\n\
\t\texpected:  decodeHexString(c, \"{expected}\"),\n\
\t})\n\
}";

pub const PIPELINE_NO_COUNTER_SUITE: &str = "\n\n\
func (s *kdfSuite) testPipelineModeNoCounter{prf}(c *C, data *testData) {\n\
\ts.testPipelineMode(c, {prf_expr}, data, false)\n\
}";

pub const PIPELINE_NO_COUNTER_TEST: &str = "\n\n\
func (s *kdfSuite) TestPipelineModeNoCounter{prf}_{index}(c *C) {\n\
\ts.testPipelineModeNoCounter{prf}(c, &testData{\n\
\t\tkey:       decodeHexString(c, \"{key}\"),\n\
\t\tfixed:     decodeHexString(c, \"{fixed}\"),\n\
\t\tbitLength: {l},\n\
\t\texpected:  decodeHexString(c, \"{expected}\"),\n\
\t})\n\
}";
