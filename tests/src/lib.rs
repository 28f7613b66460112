mod quiz_flow;
